use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ItineraryResponse, TripRequest},
    services::prompt::{GenerationSettings, NO_ITINERARY, build_prompt},
    state::SharedState,
};

pub async fn create_itinerary_handler(
    State(state): State<SharedState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let Json(trip) = payload?;

    if trip.destination.trim().is_empty() {
        return Err(AppError::Validation(
            "destination must not be empty".to_string(),
        ));
    }

    tracing::info!(
        destination = %trip.destination,
        days = %trip.days,
        budget = %trip.budget,
        trip_type = %trip.trip_type,
        "Trip details received"
    );

    let prompt = build_prompt(&trip);
    let text = state
        .generator
        .generate(&prompt, &GenerationSettings::default())
        .await?;

    let itinerary = match text {
        Some(text) => {
            tracing::info!(chars = text.len(), itinerary = %text, "Gemini response");
            text
        }
        None => {
            tracing::warn!("Gemini returned no itinerary text");
            NO_ITINERARY.to_string()
        }
    };

    Ok(Json(ItineraryResponse { itinerary }))
}
