use std::sync::Arc;

use axum::{extract::State, Json};

use models::greeting::Greeting;
use service::greeting::Greetings;

pub async fn hello(State(greetings): State<Arc<Greetings>>) -> Json<Greeting> {
    Json(greetings.default_greeting().clone())
}

pub async fn hello2(State(greetings): State<Arc<Greetings>>) -> Json<Greeting> {
    Json(greetings.special_greeting().clone())
}
