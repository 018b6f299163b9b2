use crate::message::TripRequest;

/// Returned in place of an itinerary when the model produced no text.
pub const NO_ITINERARY: &str = "No itinerary found";

/// Sampling settings sent with every itinerary request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub candidate_count: u32,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            candidate_count: 1,
            max_output_tokens: 500,
            temperature: 1.0,
        }
    }
}

pub fn build_prompt(trip: &TripRequest) -> String {
    format!(
        "Please create a detailed itinerary for a {} trip to {} for {} days with a {} budget. \
         Include points of interest, restaurants, and activities for each day.",
        trip.trip_type, trip.destination, trip.days, trip.budget
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TripDays;

    fn trip() -> TripRequest {
        TripRequest {
            destination: "Kyoto".to_string(),
            days: TripDays::from(4),
            budget: "medium".to_string(),
            trip_type: "cultural".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_every_field() {
        let prompt = build_prompt(&trip());
        assert!(prompt.contains("Kyoto"));
        assert!(prompt.contains("4 days"));
        assert!(prompt.contains("medium budget"));
        assert!(prompt.contains("cultural trip"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt(&trip()), build_prompt(&trip()));
        assert_eq!(
            build_prompt(&trip()),
            "Please create a detailed itinerary for a cultural trip to Kyoto for 4 days \
             with a medium budget. Include points of interest, restaurants, and activities \
             for each day."
        );
    }

    #[test]
    fn default_settings() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.candidate_count, 1);
        assert_eq!(settings.max_output_tokens, 500);
        assert_eq!(settings.temperature, 1.0);
    }
}
