// HTTP handler bindings for the game API endpoints
//
// Thin wrapper functions that bind Rocket HTTP routes to the GameManager.
// Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting the GameManager from Rocket's managed state
// - Delegating to manager methods
// - Serializing responses

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, post};
use serde_json::{json, Value};

use crate::game::GameManager;
use crate::types::NewGameRequest;

/// POST /api/new_game endpoint
/// Starts a fresh game with the requested (or default) search strategy
#[post("/api/new_game", format = "json", data = "<request>")]
pub fn new_game(manager: &rocket::State<GameManager>, request: Json<NewGameRequest>) -> Json<Value> {
    let snapshot = manager.new_game(request.strategy);
    let message = format!("game started with {}", snapshot.strategy.as_str());

    Json(json!({
        "state": snapshot,
        "message": message,
    }))
}

/// POST /api/turn endpoint
/// Advances the live game by one full turn and returns the new state
#[post("/api/turn")]
pub async fn advance_turn(manager: &rocket::State<GameManager>) -> Result<Json<Value>, Status> {
    match manager.advance_turn().await {
        Some(outcome) => Ok(Json(json!({
            "state": outcome.snapshot,
            "terminated": outcome.terminated,
            "hunter_move": outcome.hunter_move.map(|d| d.as_str()),
        }))),
        None => Err(Status::BadRequest),
    }
}

/// GET /api/state endpoint
/// Returns a snapshot of the live game without advancing it
#[get("/api/state")]
pub fn game_state(manager: &rocket::State<GameManager>) -> Result<Json<Value>, Status> {
    match manager.state() {
        Some(snapshot) => Ok(Json(json!({ "state": snapshot }))),
        None => Err(Status::BadRequest),
    }
}
