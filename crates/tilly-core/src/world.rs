use std::collections::HashMap;

use serde::Serialize;

use crate::error::{TillyError, TillyResult};
use crate::location::Location;

/// Where every session begins.
pub const START_LOCATION: &str = "home";

/// The static location graph. Topology is fixed once built; only the item
/// lists shrink as the player picks things up.
#[derive(Debug, Clone, Serialize)]
pub struct WorldMap {
    locations: Vec<Location>,

    // Index
    #[serde(skip)]
    by_id: HashMap<String, usize>,
}

impl WorldMap {
    /// Build a world from locations, rejecting duplicate ids and connections
    /// that point at unknown locations.
    pub fn from_locations(locations: Vec<Location>) -> TillyResult<Self> {
        let mut by_id = HashMap::with_capacity(locations.len());
        for (idx, loc) in locations.iter().enumerate() {
            if by_id.insert(loc.id.clone(), idx).is_some() {
                return Err(TillyError::DuplicateLocation(loc.id.clone()));
            }
        }

        for loc in &locations {
            if let Some(dangling) = loc.connections.iter().find(|c| !by_id.contains_key(*c)) {
                return Err(TillyError::InvalidLocation(dangling.clone()));
            }
        }

        Ok(Self { locations, by_id })
    }

    /// The built-in eight-location house and yard.
    pub fn standard() -> Self {
        let locations = standard_locations();
        let by_id = locations
            .iter()
            .enumerate()
            .map(|(idx, loc)| (loc.id.clone(), idx))
            .collect();
        Self { locations, by_id }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a location by id.
    pub fn location(&self, id: &str) -> TillyResult<&Location> {
        self.by_id
            .get(id)
            .map(|&idx| &self.locations[idx])
            .ok_or_else(|| invalid(id))
    }

    fn location_mut(&mut self, id: &str) -> TillyResult<&mut Location> {
        match self.by_id.get(id) {
            Some(&idx) => Ok(&mut self.locations[idx]),
            None => Err(invalid(id)),
        }
    }

    /// Outbound connections of a location, in declared order.
    pub fn connections_of(&self, id: &str) -> TillyResult<&[String]> {
        self.location(id).map(|loc| loc.connections.as_slice())
    }

    /// Items currently lying at a location.
    pub fn items_of(&self, id: &str) -> TillyResult<&[String]> {
        self.location(id).map(|loc| loc.items.as_slice())
    }

    /// The text shown on arrival at a location.
    pub fn description_of(&self, id: &str) -> TillyResult<&str> {
        self.location(id).map(|loc| loc.description.as_str())
    }

    /// Remove an item from a location. Returns `Ok(false)` if the item was
    /// not there.
    pub fn remove_item(&mut self, location: &str, item: &str) -> TillyResult<bool> {
        self.location_mut(location).map(|loc| loc.remove_item(item))
    }

    /// Whether a location with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All location ids, in declared order.
    pub fn location_ids(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|loc| loc.id.as_str())
    }

    /// All locations, in declared order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the map has no locations at all.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

fn invalid(id: &str) -> TillyError {
    tracing::error!(location = id, "lookup of unknown location");
    TillyError::InvalidLocation(id.to_string())
}

fn standard_locations() -> Vec<Location> {
    vec![
        Location::new(
            "home",
            "You are at home. The sun is shining through the windows.",
        )
        .with_connections(["garden", "kitchen", "bedroom"])
        .with_items(["map"]),
        Location::new(
            "garden",
            "You're in a beautiful garden with colorful flowers.",
        )
        .with_connections(["home", "playground"])
        .with_items(["shovel"]),
        Location::new("kitchen", "The kitchen smells like cookies!")
            .with_connections(["home", "dining_room"])
            .with_items(["cookie"]),
        Location::new(
            "bedroom",
            "This is your cozy bedroom with toys scattered around.",
        )
        .with_connections(["home", "closet"])
        .with_items(["flashlight"]),
        Location::new("playground", "A fun playground with swings and slides!")
            .with_connections(["garden", "treehouse"])
            .with_items(["ball"]),
        Location::new(
            "dining_room",
            "A large table sits in the middle of this room.",
        )
        .with_connections(["kitchen"])
        .with_items(["key"]),
        Location::new("closet", "A small dark closet with clothes hanging up.")
            .with_connections(["bedroom"])
            .with_items(["hat"]),
        Location::new("treehouse", "An awesome treehouse high up in a tree!")
            .with_connections(["playground"])
            .with_items(["telescope"]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    #[test]
    fn standard_world_is_valid() {
        let world = WorldMap::from_locations(standard_locations()).unwrap();
        assert_eq!(world.len(), 8);
        assert!(world.contains(START_LOCATION));
    }

    #[test]
    fn standard_world_declared_order() {
        let world = WorldMap::standard();
        let ids: Vec<_> = world.location_ids().collect();
        assert_eq!(
            ids,
            vec![
                "home",
                "garden",
                "kitchen",
                "bedroom",
                "playground",
                "dining_room",
                "closet",
                "treehouse"
            ]
        );
        assert_eq!(
            world.connections_of("home").unwrap(),
            ["garden", "kitchen", "bedroom"]
        );
        assert_eq!(world.items_of("closet").unwrap(), ["hat"]);
        assert_eq!(
            world.description_of("kitchen").unwrap(),
            "The kitchen smells like cookies!"
        );
    }

    #[test]
    fn standard_world_is_connected_from_home() {
        let world = WorldMap::standard();
        let mut seen = HashSet::from([START_LOCATION.to_string()]);
        let mut queue = VecDeque::from([START_LOCATION.to_string()]);
        while let Some(id) = queue.pop_front() {
            for next in world.connections_of(&id).unwrap() {
                if seen.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }
        assert_eq!(seen.len(), world.len());
    }

    #[test]
    fn unknown_location_is_an_error() {
        let world = WorldMap::standard();
        assert_eq!(
            world.connections_of("attic"),
            Err(TillyError::InvalidLocation("attic".to_string()))
        );
        assert!(world.items_of("attic").is_err());
        assert!(world.description_of("attic").is_err());
    }

    #[test]
    fn directed_edges_are_not_symmetrized() {
        let world = WorldMap::from_locations(vec![
            Location::new("a", "A").with_connections(["b"]),
            Location::new("b", "B"),
        ])
        .unwrap();
        assert_eq!(world.connections_of("a").unwrap(), ["b"]);
        assert!(world.connections_of("b").unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = WorldMap::from_locations(vec![Location::new("a", "A"), Location::new("a", "again")])
            .unwrap_err();
        assert_eq!(err, TillyError::DuplicateLocation("a".to_string()));
    }

    #[test]
    fn dangling_connection_rejected() {
        let err = WorldMap::from_locations(vec![Location::new("a", "A").with_connections(["nowhere"])])
            .unwrap_err();
        assert_eq!(err, TillyError::InvalidLocation("nowhere".to_string()));
    }

    #[test]
    fn remove_item_shrinks_live_view() {
        let mut world = WorldMap::standard();
        assert!(world.remove_item("home", "map").unwrap());
        assert!(world.items_of("home").unwrap().is_empty());
        assert!(!world.remove_item("home", "map").unwrap());
        assert!(world.remove_item("attic", "map").is_err());
    }

    #[test]
    fn serializes_locations_only() {
        let json = serde_json::to_value(WorldMap::standard()).unwrap();
        let locations = json["locations"].as_array().unwrap();
        assert_eq!(locations.len(), 8);
        assert_eq!(locations[0]["id"], "home");
        assert!(json.get("by_id").is_none());
    }
}
