//! Distance-triggered navigation.

use std::collections::HashMap;

use glam::Vec3;

use crate::systems::orbit::Planet;

/// A navigation the host should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub planet: String,
    pub url: String,
}

/// Sends the visitor to a page when the ship flies close to a planet.
///
/// Fires at most once: after the first trigger the page is unloading, so
/// later hits are suppressed.
#[derive(Debug, Clone)]
pub struct ProximityNavigator {
    /// Trigger when distance is strictly below this.
    pub threshold: f32,
    routes: HashMap<String, String>,
    fired: bool,
}

impl Default for ProximityNavigator {
    fn default() -> Self {
        Self::new(20.0)
            .with_route("about-me", "./planets/about.html")
            .with_route("projects", "./planets/project.html")
            .with_route("contact", "./planets/contact.html")
    }
}

impl ProximityNavigator {
    /// A navigator with no routes.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            routes: HashMap::new(),
            fired: false,
        }
    }

    pub fn with_route(mut self, planet: impl Into<String>, url: impl Into<String>) -> Self {
        self.routes.insert(planet.into(), url.into());
        self
    }

    pub fn route(&self, planet: &str) -> Option<&str> {
        self.routes.get(planet).map(String::as_str)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Check the ship against every planet in order. Returns the first routed hit.
    pub fn check(&mut self, ship: Vec3, planets: &[Planet]) -> Option<Navigation> {
        if self.fired {
            return None;
        }
        for planet in planets {
            if ship.distance(planet.position) >= self.threshold {
                continue;
            }
            match self.route(&planet.name) {
                Some(url) => {
                    log::info!("Approaching {}, navigating to {}", planet.name, url);
                    let hit = Navigation {
                        planet: planet.name.clone(),
                        url: url.to_string(),
                    };
                    self.fired = true;
                    return Some(hit);
                }
                None => log::warn!("No page for planet {}", planet.name),
            }
        }
        None
    }
}
