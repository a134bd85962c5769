//! Navigation over a parsed XML tree.
//!
//! The extractors only need a handful of capabilities from a node: its local
//! tag name, attribute lookup, text content and child enumeration. Those are
//! captured by [`Element`], implemented here for [`roxmltree::Node`]. The free
//! functions below are the lookup helpers every field extractor is built on.

/// A read-only view of one element in a document tree.
pub trait Element: Copy {
    /// Local tag name with any namespace prefix stripped.
    fn tag(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Concatenated text of every text node below this element.
    fn text(&self) -> String;

    /// Direct element children in document order.
    fn children(&self) -> impl Iterator<Item = Self>;

    /// All element descendants in document order, excluding `self`.
    fn descendants(&self) -> impl Iterator<Item = Self>;
}

impl<'a, 'input: 'a> Element for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn text(&self) -> String {
        roxmltree::Node::descendants(self)
            .filter(|n| n.is_text())
            .filter_map(|n| roxmltree::Node::text(&n))
            .collect()
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        roxmltree::Node::children(self).filter(|n| n.is_element())
    }

    fn descendants(&self) -> impl Iterator<Item = Self> {
        roxmltree::Node::descendants(self)
            .skip(1)
            .filter(|n| n.is_element())
    }
}

/// Returns the first direct child tagged `tag`.
pub fn find_child<E: Element>(tag: &str, node: E) -> Option<E> {
    node.children().find(|child| child.tag() == tag)
}

/// Returns every direct child tagged `tag`, in document order.
pub fn find_children<E: Element>(tag: &str, node: E) -> Vec<E> {
    node.children().filter(|child| child.tag() == tag).collect()
}

/// Returns the text content of the first direct child tagged `tag`.
pub fn find_child_value<E: Element>(tag: &str, node: E) -> Option<String> {
    find_child(tag, node).map(|child| child.text())
}

/// Resolves a path of tag names below `node`.
///
/// Every child matching the current tag is tried in order before giving up,
/// so a path like `Extensions/LX/AvgRunCadence` is found even when several
/// `LX` siblings exist and only a later one carries the leaf.
pub fn find_child_path<E: Element>(node: E, path: &[&str]) -> Option<E> {
    let Some((tag, rest)) = path.split_first() else {
        return Some(node);
    };

    node.children()
        .filter(|child| child.tag() == *tag)
        .find_map(|child| find_child_path(child, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const LAP: &str = r#"<Lap xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2"
        xmlns:ns3="http://www.garmin.com/xmlschemas/ActivityExtension/v2"
        StartTime="2024-03-01T07:00:00Z">
        <TotalTimeSeconds>300.0</TotalTimeSeconds>
        <Extensions>
            <ns3:LX><ns3:MaxBikeCadence>95</ns3:MaxBikeCadence></ns3:LX>
            <ns3:LX><ns3:AvgRunCadence>88</ns3:AvgRunCadence></ns3:LX>
        </Extensions>
        <Track><Trackpoint/><Trackpoint/><Other/><Trackpoint/></Track>
    </Lap>"#;

    #[test]
    fn test_find_child_ignores_namespace_prefix() {
        let doc = Document::parse(LAP).unwrap();
        let lap = doc.root_element();

        let ext = find_child("Extensions", lap).unwrap();
        let lx = find_child("LX", ext).unwrap();
        assert_eq!(lx.tag(), "LX");
        assert!(find_child("Missing", lap).is_none());
    }

    #[test]
    fn test_find_children_keeps_document_order() {
        let doc = Document::parse(LAP).unwrap();
        let track = find_child("Track", doc.root_element()).unwrap();

        assert_eq!(find_children("Trackpoint", track).len(), 3);
        assert!(find_children("Lap", track).is_empty());
    }

    #[test]
    fn test_find_child_value() {
        let doc = Document::parse(LAP).unwrap();
        let lap = doc.root_element();

        assert_eq!(
            find_child_value("TotalTimeSeconds", lap).as_deref(),
            Some("300.0")
        );
        assert_eq!(find_child_value("DistanceMeters", lap), None);
    }

    #[test]
    fn test_find_child_path_backtracks_over_siblings() {
        let doc = Document::parse(LAP).unwrap();
        let lap = doc.root_element();

        let cadence = find_child_path(lap, &["Extensions", "LX", "AvgRunCadence"]).unwrap();
        assert_eq!(Element::text(&cadence), "88");

        let bike = find_child_path(lap, &["Extensions", "LX", "MaxBikeCadence"]).unwrap();
        assert_eq!(Element::text(&bike), "95");

        assert!(find_child_path(lap, &["Extensions", "LX", "AvgSpeed"]).is_none());
    }

    #[test]
    fn test_attribute_and_descendants() {
        let doc = Document::parse(LAP).unwrap();
        let lap = doc.root_element();

        assert_eq!(
            Element::attribute(&lap, "StartTime"),
            Some("2024-03-01T07:00:00Z")
        );
        assert!(Element::descendants(&lap).any(|n| n.tag() == "Other"));
        assert!(!Element::descendants(&lap).any(|n| n.tag() == "Lap"));
    }
}
