//! Boundary patches and their boundary-condition types.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Boundary-condition type assigned to a mesh patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoundaryType {
    /// Dirichlet for velocity and turbulence, Neumann for pressure.
    Inlet,
    /// Far-field patch that may act as inlet or outlet.
    Freestream,
    /// Fixed pressure, zero gradient for everything else (reflective).
    Outlet,
    /// Outlet that lets flow re-enter the domain.
    BackflowOutlet,
    /// Non-reflective outlet, quantities are advected out of the domain.
    AdvectiveOutlet,
    Wall,
    /// Out-of-plane patches of quasi two-dimensional meshes.
    Empty,
    /// Slip plane, zero gradient for all quantities.
    Symmetry,
    /// Periodic patch pair defined by the mesh.
    Cyclic,
}

impl BoundaryType {
    pub fn all() -> [BoundaryType; 9] {
        [
            BoundaryType::Inlet,
            BoundaryType::Freestream,
            BoundaryType::Outlet,
            BoundaryType::BackflowOutlet,
            BoundaryType::AdvectiveOutlet,
            BoundaryType::Wall,
            BoundaryType::Empty,
            BoundaryType::Symmetry,
            BoundaryType::Cyclic,
        ]
    }
}

/// Errors raised while building a patch map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchMapError {
    #[error("Patch '{0}' is defined more than once")]
    DuplicatePatch(String),
}

/// Ordered mapping from patch name to boundary type.
///
/// Insertion order is the order in which patches are written to every
/// field file. Patch names are unique. Whether the names match the mesh is
/// left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryPatchMap {
    patches: Vec<(String, BoundaryType)>,
}

impl BoundaryPatchMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(name, type)` pairs, keeping their order.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, PatchMapError>
    where
        I: IntoIterator<Item = (S, BoundaryType)>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for (name, boundary_type) in pairs {
            map.insert(name, boundary_type)?;
        }
        Ok(map)
    }

    /// Appends a patch. Fails if the name is already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        boundary_type: BoundaryType,
    ) -> Result<(), PatchMapError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(PatchMapError::DuplicatePatch(name));
        }
        self.patches.push((name, boundary_type));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<BoundaryType> {
        self.patches
            .iter()
            .find(|(patch, _)| patch == name)
            .map(|(_, boundary_type)| *boundary_type)
    }

    /// Iterates patches in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, BoundaryType)> {
        self.patches
            .iter()
            .map(|(name, boundary_type)| (name.as_str(), *boundary_type))
    }

    /// Returns true if any patch has the given type.
    pub fn contains_type(&self, boundary_type: BoundaryType) -> bool {
        self.patches.iter().any(|(_, t)| *t == boundary_type)
    }

    /// Names of all patches of the given type, in order.
    pub fn names_of(&self, boundary_type: BoundaryType) -> Vec<&str> {
        self.iter()
            .filter(|(_, t)| *t == boundary_type)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

impl Serialize for BoundaryPatchMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.patches.len()))?;
        for (name, boundary_type) in &self.patches {
            map.serialize_entry(name, boundary_type)?;
        }
        map.end()
    }
}

struct PatchMapVisitor;

impl<'de> Visitor<'de> for PatchMapVisitor {
    type Value = BoundaryPatchMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from patch name to boundary type")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BoundaryPatchMap::new();
        while let Some((name, boundary_type)) = access.next_entry::<String, BoundaryType>()? {
            map.insert(name, boundary_type)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for BoundaryPatchMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PatchMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let map = BoundaryPatchMap::from_pairs([
            ("outlet", BoundaryType::Outlet),
            ("inlet", BoundaryType::Inlet),
            ("wallA", BoundaryType::Wall),
        ])
        .unwrap();
        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["outlet", "inlet", "wallA"]);
        assert_eq!(map.get("inlet"), Some(BoundaryType::Inlet));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut map = BoundaryPatchMap::new();
        map.insert("wall", BoundaryType::Wall).unwrap();
        assert_eq!(
            map.insert("wall", BoundaryType::Symmetry),
            Err(PatchMapError::DuplicatePatch("wall".to_string()))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn json_object_order_is_preserved() {
        let json = r#"{"top": "SYMMETRY", "inlet": "INLET", "airfoil": "WALL", "sides": "EMPTY"}"#;
        let map: BoundaryPatchMap = serde_json::from_str(json).unwrap();
        let pairs: Vec<(&str, BoundaryType)> = map.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("top", BoundaryType::Symmetry),
                ("inlet", BoundaryType::Inlet),
                ("airfoil", BoundaryType::Wall),
                ("sides", BoundaryType::Empty),
            ]
        );

        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(
            back,
            r#"{"top":"SYMMETRY","inlet":"INLET","airfoil":"WALL","sides":"EMPTY"}"#
        );
    }

    #[test]
    fn json_duplicate_keys_are_an_error() {
        let json = r#"{"wall": "WALL", "wall": "INLET"}"#;
        let result: Result<BoundaryPatchMap, _> = serde_json::from_str(json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("defined more than once"), "{err}");
    }

    #[test]
    fn filters_by_type() {
        let map = BoundaryPatchMap::from_pairs([
            ("upper", BoundaryType::Wall),
            ("farfield", BoundaryType::Freestream),
            ("lower", BoundaryType::Wall),
        ])
        .unwrap();
        assert_eq!(map.names_of(BoundaryType::Wall), vec!["upper", "lower"]);
        assert!(map.contains_type(BoundaryType::Freestream));
        assert!(!map.contains_type(BoundaryType::Inlet));
    }
}
