// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0

//! HTTP routes and handlers.
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use log::info;
use std::cmp::Ordering;

use showdown_cards::{Card, CardError, parse_cards};
use showdown_eval::HandValue;
use showdown_odds::estimate;

use crate::Config;
use crate::dto::{
    CompareRequest, CompareResponse, ErrorResponse, EvaluateRequest, EvaluateResponse,
    ProbabilityRequest, ProbabilityResponse,
};

/// Runs the API server until shutdown.
pub async fn run(config: Config) -> std::io::Result<()> {
    info!(
        "starting showdown API server on {}:{}",
        config.address, config.port
    );

    HttpServer::new(|| {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .route("/health", web::get().to(health))
            .route("/api/evaluate", web::post().to(evaluate))
            .route("/api/compare", web::post().to(compare))
            .route("/api/probability", web::post().to(probability))
    })
    .workers(config.workers)
    .bind((config.address, config.port))?
    .run()
    .await
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn evaluate(req: web::Json<EvaluateRequest>) -> impl Responder {
    let cards = match player_cards(&req.hole_cards, &req.community_cards, "") {
        Ok(cards) => cards,
        Err(response) => return response,
    };

    match HandValue::eval(&cards) {
        Ok(hand) => HttpResponse::Ok().json(EvaluateResponse {
            hand_rank: hand.rank().to_string(),
            description: hand.description().to_string(),
            cards: hand.best_five().iter().map(Card::to_string).collect(),
            success: true,
        }),
        Err(e) => bad_request(e.to_string()),
    }
}

async fn compare(req: web::Json<CompareRequest>) -> impl Responder {
    let p1 = player_cards(
        &req.player1_hole_cards,
        &req.player1_community_cards,
        " for player 1",
    );
    let p1_cards = match p1 {
        Ok(cards) => cards,
        Err(response) => return response,
    };

    let p2 = player_cards(
        &req.player2_hole_cards,
        &req.player2_community_cards,
        " for player 2",
    );
    let p2_cards = match p2 {
        Ok(cards) => cards,
        Err(response) => return response,
    };

    let (p1, p2) = match (HandValue::eval(&p1_cards), HandValue::eval(&p2_cards)) {
        (Ok(p1), Ok(p2)) => (p1, p2),
        (Err(e), _) | (_, Err(e)) => return bad_request(e.to_string()),
    };

    let winner = match p1.cmp(&p2) {
        Ordering::Greater => "player1",
        Ordering::Less => "player2",
        Ordering::Equal => "tie",
    };

    HttpResponse::Ok().json(CompareResponse {
        player1_hand: p1.rank().to_string(),
        player1_description: p1.description().to_string(),
        player2_hand: p2.rank().to_string(),
        player2_description: p2.description().to_string(),
        winner: winner.to_string(),
        success: true,
    })
}

async fn probability(req: web::Json<ProbabilityRequest>) -> impl Responder {
    let (hole, community) = match parse_known_cards(&req.hole_cards, &req.community_cards, "") {
        Ok(cards) => cards,
        Err(response) => return response,
    };

    match estimate(&hole, &community, req.num_players, req.simulations) {
        Ok(result) => {
            info!(
                "probability: win={:.2}% tie={:.2}% loss={:.2}%",
                result.win_probability * 100.0,
                result.tie_probability * 100.0,
                result.loss_probability * 100.0
            );
            HttpResponse::Ok().json(ProbabilityResponse {
                result,
                success: true,
            })
        }
        Err(e) => bad_request(e.to_string()),
    }
}

/// Parses hole and community tokens, keeping them separate.
fn parse_known_cards(
    hole: &[String],
    community: &[String],
    who: &str,
) -> Result<(Vec<Card>, Vec<Card>), HttpResponse> {
    let hole = parse_cards(hole)
        .map_err(|e| card_error("hole", who, e))?;
    let community = parse_cards(community)
        .map_err(|e| card_error("community", who, e))?;
    Ok((hole, community))
}

/// Parses a player's hole and community tokens into one evaluation hand.
fn player_cards(
    hole: &[String],
    community: &[String],
    who: &str,
) -> Result<Vec<Card>, HttpResponse> {
    let (hole, community) = parse_known_cards(hole, community, who)?;

    let mut cards = hole;
    cards.extend(community);
    if cards.len() < 5 {
        return Err(bad_request(format!(
            "need at least 5 cards total{who}, got {}",
            cards.len()
        )));
    }

    Ok(cards)
}

fn card_error(kind: &str, who: &str, e: CardError) -> HttpResponse {
    bad_request(format!("invalid {kind} cards{who}: {e}"))
}

fn bad_request(error: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        success: false,
        error,
    })
}
