//! Detail view: signature dishes and operating timings of one venue

use std::fmt::Write as _;

use shared::{SignatureDish, TimingValue, Venue, VenueTiming};

/// One signature-dish row
#[derive(Debug, Clone, PartialEq)]
pub struct DishRow {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl From<&SignatureDish> for DishRow {
    fn from(dish: &SignatureDish) -> Self {
        Self {
            name: dish.dish_name.clone().unwrap_or_default(),
            price: dish.dish_price.map(|p| p.to_string()).unwrap_or_default(),
            category: dish.dish_category.clone().unwrap_or_default(),
        }
    }
}

/// The timing row (first timing entry only)
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    pub morning: String,
    pub noon: String,
    pub evening: String,
    pub late_night: &'static str,
}

impl From<&VenueTiming> for TimingRow {
    fn from(timing: &VenueTiming) -> Self {
        let show = |value: &Option<TimingValue>| {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        };
        Self {
            morning: show(&timing.morning),
            noon: show(&timing.noon),
            evening: show(&timing.evening),
            late_night: timing.late_night_label(),
        }
    }
}

/// Rendered content of the detail overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub dishes: Vec<DishRow>,
    /// Present only when the venue has at least one timing entry
    pub timing: Option<TimingRow>,
}

impl DetailView {
    /// Build the view; nothing is shown when hidden or without a record.
    pub fn build(shown: bool, venue: Option<&Venue>) -> Option<Self> {
        let venue = venue.filter(|_| shown)?;
        Some(Self {
            title: venue.hotel_name.clone().unwrap_or_default(),
            dishes: venue.hotel_signature_dishes.iter().map(DishRow::from).collect(),
            timing: venue.hotel_timings.first().map(TimingRow::from),
        })
    }

    /// Plain-text rendering for the terminal
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Hotel Details: {}", self.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "Signature Dishes");
        let dishes: Vec<Vec<String>> = self
            .dishes
            .iter()
            .map(|d| vec![d.name.clone(), d.price.clone(), d.category.clone()])
            .collect();
        out.push_str(&crate::table::render_table(
            &["Dish Name", "Price", "Category"],
            &dishes,
        ));

        if let Some(timing) = &self.timing {
            let _ = writeln!(out);
            let _ = writeln!(out, "Operating Timings");
            out.push_str(&crate::table::render_table(
                &["Morning", "Noon", "Evening", "Late Night"],
                &[vec![
                    timing.morning.clone(),
                    timing.noon.clone(),
                    timing.evening.clone(),
                    timing.late_night.to_string(),
                ]],
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue(value: serde_json::Value) -> Venue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_hidden_or_missing() {
        let v = venue(json!({"hotelId": 1}));
        assert!(DetailView::build(false, Some(&v)).is_none());
        assert!(DetailView::build(true, None).is_none());
        assert!(DetailView::build(false, None).is_none());
    }

    #[test]
    fn test_empty_lists() {
        let v = venue(json!({"hotelId": 1, "hotelName": "Plain"}));
        let view = DetailView::build(true, Some(&v)).unwrap();
        assert!(view.dishes.is_empty());
        assert!(view.timing.is_none());

        let text = view.render();
        assert!(text.contains("Signature Dishes"));
        assert!(!text.contains("Operating Timings"));
    }

    #[test]
    fn test_dishes_and_first_timing() {
        let v = venue(json!({
            "hotelId": 1,
            "hotelName": "Spice Route",
            "hotelSignatureDishes": [
                {"hotelSignatureDishId": 1, "dishName": "Misal", "dishPrice": 120, "dishCategory": "Veg"},
                {"hotelSignatureDishId": 2, "dishName": "Kheema", "dishPrice": "180.5"}
            ],
            "hotelTimings": [
                {"morning": "8-11", "noon": "12-3", "evening": "7-11", "lateNight": false},
                {"morning": "ignored", "lateNight": true}
            ]
        }));
        let view = DetailView::build(true, Some(&v)).unwrap();
        assert_eq!(
            view.dishes,
            vec![
                DishRow {
                    name: "Misal".into(),
                    price: "120".into(),
                    category: "Veg".into()
                },
                DishRow {
                    name: "Kheema".into(),
                    price: "180.5".into(),
                    category: String::new()
                },
            ]
        );
        let timing = view.timing.clone().unwrap();
        assert_eq!(timing.morning, "8-11");
        assert_eq!(timing.late_night, "No");

        let text = view.render();
        assert!(text.contains("Operating Timings"));
        assert!(text.contains("Misal"));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn test_late_night_yes() {
        let v = venue(json!({"hotelId": 1, "hotelTimings": [{"lateNight": true, "noon": true}]}));
        let timing = DetailView::build(true, Some(&v)).unwrap().timing.unwrap();
        assert_eq!(timing.late_night, "Yes");
        assert_eq!(timing.noon, "Yes");
        assert_eq!(timing.morning, "");
    }
}
