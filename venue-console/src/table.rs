//! Row model and plain-text table rendering for the venue list

use shared::Venue;

use crate::links::MapLinkCell;
use crate::review::Decision;

/// Approve/Reject button state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActions {
    /// Already decided; no buttons
    Hidden,
    /// Buttons clickable
    Ready,
    /// A decision is in flight; buttons show the busy label and are disabled
    Busy,
}

impl RowActions {
    pub fn label(&self, decision: Decision) -> &'static str {
        match self {
            Self::Hidden => "",
            Self::Ready => decision.label(),
            Self::Busy => decision.busy_label(),
        }
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// One display row of the list
///
/// Values come from [`Venue::display_source`], so duplicates show their
/// canonical record; the id and decision flags stay the row's own.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueRow {
    pub id: i64,
    pub mobile: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub rating: String,
    pub phone: String,
    pub map_link: MapLinkCell,
    pub vlog_link: String,
    pub view_count: String,
    pub post_date: String,
    pub latitude: String,
    pub longitude: String,
    pub verified: bool,
    pub valid: bool,
    pub actions: RowActions,
    pub editing: bool,
}

impl VenueRow {
    pub fn new(venue: &Venue, busy: bool, editing: bool) -> Self {
        let shown = venue.display_source();
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        let actions = if venue.verified {
            RowActions::Hidden
        } else if busy {
            RowActions::Busy
        } else {
            RowActions::Ready
        };
        Self {
            id: venue.hotel_id,
            mobile: text(&venue.user_mobile_number),
            name: text(&shown.hotel_name),
            address: text(&shown.hotel_address),
            city: text(&shown.hotel_city),
            rating: number(shown.hotel_rating),
            phone: text(&shown.hotel_phone),
            map_link: MapLinkCell::classify(shown.hotel_map_location_link.as_deref()),
            vlog_link: text(&shown.hotel_vlog_video_link),
            view_count: shown
                .vlog_video_view_count
                .map(|v| v.to_string())
                .unwrap_or_default(),
            post_date: text(&shown.vlog_post_date),
            latitude: number(shown.latitude),
            longitude: number(shown.longitude),
            verified: venue.verified,
            valid: venue.valid,
            actions,
            editing,
        }
    }

    pub const HEADERS: [&'static str; 12] = [
        "Id", "DataEntry Number", "Name", "City", "Rating", "Phone", "Map Location", "View Count",
        "Post Date", "Status", "Approve", "Reject",
    ];

    fn status(&self) -> &'static str {
        match (self.editing, self.verified, self.valid) {
            (true, _, _) => "editing",
            (false, false, _) => "pending",
            (false, true, true) => "approved",
            (false, true, false) => "rejected",
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.mobile.clone(),
            self.name.clone(),
            self.city.clone(),
            self.rating.clone(),
            self.phone.clone(),
            self.map_link.label().to_string(),
            self.view_count.clone(),
            self.post_date.clone(),
            self.status().to_string(),
            self.actions.label(Decision::Approve).to_string(),
            self.actions.label(Decision::Reject).to_string(),
        ]
    }
}

/// Render rows under headers with space-padded columns
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(rule.iter().map(String::as_str).collect()));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_canonical_for_duplicates() {
        let mut canonical = Venue::new(1);
        canonical.hotel_name = Some("Original".into());
        canonical.hotel_map_location_link = Some("https://maps.google.com/x".into());

        let mut dup = Venue::new(2);
        dup.hotel_name = Some("Copy".into());
        dup.hotel_map_location_link = Some("somewhere".into());
        dup.user_mobile_number = Some("9876543210".into());
        dup.duplicate_video_data = Some(true);
        dup.hotel = Some(Box::new(canonical));

        let row = VenueRow::new(&dup, false, false);
        assert_eq!(row.id, 2);
        assert_eq!(row.mobile, "9876543210");
        assert_eq!(row.name, "Original");
        assert!(row.map_link.is_link());
    }

    #[test]
    fn test_actions() {
        let mut venue = Venue::new(1);
        let row = VenueRow::new(&venue, false, false);
        assert_eq!(row.actions, RowActions::Ready);
        assert_eq!(row.cells()[10], "Approve");

        let row = VenueRow::new(&venue, true, false);
        assert_eq!(row.actions, RowActions::Busy);
        assert!(!row.actions.is_clickable());
        assert_eq!(row.cells()[10], "Approving...");
        assert_eq!(row.cells()[11], "Rejecting...");

        venue.verified = true;
        let row = VenueRow::new(&venue, false, false);
        assert_eq!(row.actions, RowActions::Hidden);
        assert_eq!(row.cells()[9], "rejected");
    }

    #[test]
    fn test_render_table_pads_columns() {
        let text = render_table(
            &["A", "Bee"],
            &[vec!["long value".into(), "x".into()], vec!["y".into(), "z".into()]],
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "A           Bee");
        assert_eq!(lines[1], "----------  ---");
        assert_eq!(lines[2], "long value  x");
        assert_eq!(lines[3], "y           z");
    }
}
