use serde::Serialize;

/// A named node in the world graph.
///
/// Connections are directed: a location may list a neighbor that does not
/// list it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// The unique key, also the name shown to the player.
    pub id: String,
    /// The text shown on arrival.
    pub description: String,
    /// Outbound connections, in declared order.
    pub connections: Vec<String>,
    /// Items currently lying here, in declared order.
    pub items: Vec<String>,
}

impl Location {
    /// Create a location with no connections and no items.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            connections: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Set the outbound connections.
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Set the items lying here.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `other` is listed among this location's connections.
    pub fn connects_to(&self, other: &str) -> bool {
        self.connections.iter().any(|c| c == other)
    }

    /// Whether `item` is lying here.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove an item from this location. Returns `false` if it was not here.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pond() -> Location {
        Location::new("pond", "Ducks paddle about.")
            .with_connections(["meadow", "bridge"])
            .with_items(["pebble", "feather"])
    }

    #[test]
    fn builder_keeps_declared_order() {
        let loc = pond();
        assert_eq!(loc.connections, vec!["meadow", "bridge"]);
        assert_eq!(loc.items, vec!["pebble", "feather"]);
    }

    #[test]
    fn connects_to_is_exact() {
        let loc = pond();
        assert!(loc.connects_to("bridge"));
        assert!(!loc.connects_to("Bridge"));
        assert!(!loc.connects_to("brid"));
    }

    #[test]
    fn remove_item_once() {
        let mut loc = pond();
        assert!(loc.remove_item("pebble"));
        assert!(!loc.has_item("pebble"));
        assert!(!loc.remove_item("pebble"));
        assert_eq!(loc.items, vec!["feather"]);
    }
}
