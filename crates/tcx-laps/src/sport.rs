use tracing::warn;

use crate::{element::Element, models::SportType};

/// Classifies an `Activity` element by its `Sport` attribute.
///
/// Rides without a single `Position` sample anywhere below the activity are
/// indoor rides. Sports other than running and biking are left unclassified.
pub fn classify<E: Element>(activity: E) -> Option<SportType> {
    match activity.attribute("Sport") {
        Some("Running") => Some(SportType::Run),
        Some("Biking") if has_position(activity) => Some(SportType::BikeRide),
        Some("Biking") => Some(SportType::IndoorBikeRide),
        Some(other) => {
            warn!("Unsupported sport: {}", other);
            None
        }
        None => None,
    }
}

fn has_position<E: Element>(activity: E) -> bool {
    activity.descendants().any(|node| node.tag() == "Position")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn classify_xml(xml: &str) -> Option<SportType> {
        let doc = Document::parse(xml).unwrap();
        classify(doc.root_element())
    }

    #[test]
    fn test_running_ignores_position() {
        assert_eq!(
            classify_xml(r#"<Activity Sport="Running"><Lap/></Activity>"#),
            Some(SportType::Run)
        );
    }

    #[test]
    fn test_biking_with_deep_position_is_outdoor() {
        let xml = r#"<Activity Sport="Biking"><Lap><Track><Trackpoint>
            <Position><LatitudeDegrees>40.0</LatitudeDegrees></Position>
            </Trackpoint></Track></Lap></Activity>"#;
        assert_eq!(classify_xml(xml), Some(SportType::BikeRide));
    }

    #[test]
    fn test_biking_without_position_is_indoor() {
        let xml = r#"<Activity Sport="Biking"><Lap><Track><Trackpoint>
            <Time>2024-03-01T07:00:00Z</Time></Trackpoint></Track></Lap></Activity>"#;
        assert_eq!(classify_xml(xml), Some(SportType::IndoorBikeRide));
    }

    #[test]
    fn test_other_sports_are_unclassified() {
        assert_eq!(classify_xml(r#"<Activity Sport="Swimming"/>"#), None);
        assert_eq!(classify_xml(r#"<Activity Sport="Other"/>"#), None);
        assert_eq!(classify_xml("<Activity/>"), None);
    }
}
