//! Map-panel support: parsing the base map's SVG viewBox, resolving marker
//! positions into percent offsets, and choosing the country whose panel
//! opens by default.

use crate::domain::RawEventRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Parses a `viewBox` attribute value ("minX minY width height",
    /// whitespace or comma separated).
    pub fn parse_attr(raw: &str) -> Option<ViewBox> {
        let parts: Vec<f64> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [min_x, min_y, width, height] if *width > 0.0 && *height > 0.0 => Some(ViewBox {
                min_x: *min_x,
                min_y: *min_y,
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Finds the first `viewBox="…"` attribute in raw SVG markup.
    pub fn from_svg(svg: &str) -> Option<ViewBox> {
        let idx = svg.find("viewBox=")?;
        let rest = &svg[idx + "viewBox=".len()..];
        let quote = rest.chars().next()?;
        if quote != '"' && quote != '\'' {
            return None;
        }
        let inner = &rest[1..];
        let end = inner.find(quote)?;
        Self::parse_attr(&inner[..end])
    }

    /// Converts viewBox coordinates to percent offsets inside the map
    /// container.
    pub fn to_pct(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.min_x) / self.width * 100.0,
            (y - self.min_y) / self.height * 100.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkerPosition {
    /// Percent offsets inside the map container.
    Percent { left_pct: f64, top_pct: f64 },
    /// SVG viewBox units, converted with the parsed viewBox.
    ViewBox { x: f64, y: f64 },
}

/// A country pin on the event map. `svg_id` names the country's element in
/// the map SVG for exact client-side placement; `position` is the fallback.
#[derive(Debug, Clone)]
pub struct MapMarker {
    pub country: String,
    pub flag_id: Option<String>,
    pub svg_id: Option<String>,
    pub position: MarkerPosition,
}

impl MapMarker {
    pub fn new(
        country: &str,
        flag_id: &str,
        svg_id: &str,
        left_pct: f64,
        top_pct: f64,
    ) -> Self {
        Self {
            country: country.to_string(),
            flag_id: Some(flag_id.to_string()),
            svg_id: Some(svg_id.to_string()),
            position: MarkerPosition::Percent { left_pct, top_pct },
        }
    }

    /// Percent position of the pin: percent positions as-is, viewBox
    /// positions converted when a viewBox is known.
    pub fn resolved_pct(&self, view_box: Option<&ViewBox>) -> (f64, f64) {
        match (&self.position, view_box) {
            (MarkerPosition::Percent { left_pct, top_pct }, _) => (*left_pct, *top_pct),
            (MarkerPosition::ViewBox { x, y }, Some(vb)) => vb.to_pct(*x, *y),
            (MarkerPosition::ViewBox { .. }, None) => (0.0, 0.0),
        }
    }

    pub fn flag_src(&self) -> Option<String> {
        let id = self.flag_id.as_deref()?.trim();
        if id.is_empty() {
            return None;
        }
        Some(format!("/static-assets/images/flags/{}.png", id))
    }
}

/// The brand's tour stops.
pub fn default_markers() -> Vec<MapMarker> {
    vec![
        MapMarker::new("USA", "231", "US", 22.0, 34.0),
        MapMarker::new("Mexico", "142", "MX", 21.0, 46.0),
        MapMarker::new("Colombia", "47", "CO", 28.0, 56.0),
        MapMarker::new("Ecuador", "63", "EC", 26.5, 62.0),
        MapMarker::new("Brazil", "30", "BR", 36.0, 72.0),
        MapMarker::new("Spain", "205", "ES", 52.0, 36.0),
        MapMarker::new("China", "44", "CN", 75.0, 44.0),
    ]
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Country whose panel opens by default: prefer one that has both a marker
/// and at least one event (so the panel never opens empty), else the first
/// event country.
pub fn default_country(events: &[RawEventRecord], markers: &[MapMarker]) -> Option<String> {
    let event_countries: std::collections::HashSet<String> = events
        .iter()
        .map(|e| normalize(&e.country))
        .filter(|c| !c.is_empty())
        .collect();

    if let Some(marker) = markers
        .iter()
        .find(|m| event_countries.contains(&normalize(&m.country)))
    {
        return Some(marker.country.clone());
    }

    events
        .iter()
        .find(|e| !e.country.trim().is_empty())
        .map(|e| e.country.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(country: &str) -> RawEventRecord {
        RawEventRecord {
            start_date: None,
            end_date: None,
            title: "ride".to_string(),
            city: None,
            country: country.to_string(),
            image_url: None,
            news_button_text: None,
            news_link: None,
            flag: None,
        }
    }

    #[test]
    fn parses_viewbox_attr_variants() {
        let vb = ViewBox::parse_attr("0 0 1000 500").unwrap();
        assert_eq!(vb.width, 1000.0);
        assert_eq!(vb.height, 500.0);

        let vb = ViewBox::parse_attr("10, 20, 100, 50").unwrap();
        assert_eq!(vb.min_x, 10.0);
        assert_eq!(vb.min_y, 20.0);

        assert!(ViewBox::parse_attr("0 0 0 500").is_none());
        assert!(ViewBox::parse_attr("garbage").is_none());
    }

    #[test]
    fn finds_viewbox_in_svg_markup() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2000 1000"><path id="CO"/></svg>"#;
        let vb = ViewBox::from_svg(svg).unwrap();
        assert_eq!(vb.width, 2000.0);
        assert!(ViewBox::from_svg("<svg></svg>").is_none());
    }

    #[test]
    fn converts_viewbox_units_to_percent() {
        let vb = ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 200.0,
            height: 100.0,
        };
        let marker = MapMarker {
            country: "Spain".to_string(),
            flag_id: None,
            svg_id: None,
            position: MarkerPosition::ViewBox { x: 50.0, y: 25.0 },
        };
        assert_eq!(marker.resolved_pct(Some(&vb)), (25.0, 25.0));
        assert_eq!(marker.resolved_pct(None), (0.0, 0.0));
    }

    #[test]
    fn default_country_prefers_marker_with_events() {
        let markers = default_markers();
        let events = vec![event("Nowhere"), event(" brazil ")];
        assert_eq!(
            default_country(&events, &markers).as_deref(),
            Some("Brazil")
        );
    }

    #[test]
    fn default_country_falls_back_to_first_event_country() {
        let markers = default_markers();
        let events = vec![event(""), event("Atlantis")];
        assert_eq!(
            default_country(&events, &markers).as_deref(),
            Some("Atlantis")
        );
        assert_eq!(default_country(&[], &markers), None);
    }
}
