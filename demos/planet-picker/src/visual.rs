/// Per-planet visual state: hover flag plus the pose the springs chase.

use glam::Vec3;

pub const SCALE_REST: f32 = 1.0;
pub const SCALE_HOVER: f32 = 1.2;
pub const SCALE_SELECTED: f32 = 3.0;

/// Where a selected planet is pulled to.
pub const SELECTED_POS: Vec3 = Vec3::ZERO;

/// Light intensity per unit of planet size.
const LIGHT_PER_SIZE_REST: f32 = 100.0;
const LIGHT_PER_SIZE_LIT: f32 = 120.0;

/// Spring constants for the scale/position transition.
pub const SPRING_TENSION: f32 = 300.0;
pub const SPRING_FRICTION: f32 = 10.0;

/// Target pose for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    pub scale: f32,
    pub pos: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetVisual {
    home: Vec3,
    hovered: bool,
}

impl PlanetVisual {
    pub fn new(home: Vec3) -> Self {
        Self { home, hovered: false }
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns true if the flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    /// Selection wins over hover.
    pub fn target(&self, selected: bool) -> AnimationTarget {
        if selected {
            AnimationTarget { scale: SCALE_SELECTED, pos: SELECTED_POS }
        } else if self.hovered {
            AnimationTarget { scale: SCALE_HOVER, pos: self.home }
        } else {
            AnimationTarget { scale: SCALE_REST, pos: self.home }
        }
    }
}

pub fn light_intensity(size: f32, hovered: bool, selected: bool) -> f32 {
    if hovered || selected {
        size * LIGHT_PER_SIZE_LIT
    } else {
        size * LIGHT_PER_SIZE_REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: Vec3 = Vec3::new(4.9, 0.0, -7.9);

    #[test]
    fn rest_target_is_home() {
        let v = PlanetVisual::new(HOME);
        assert_eq!(v.target(false), AnimationTarget { scale: 1.0, pos: HOME });
    }

    #[test]
    fn hover_grows_in_place() {
        let mut v = PlanetVisual::new(HOME);
        assert!(v.set_hovered(true));
        assert!(!v.set_hovered(true));
        assert_eq!(v.target(false), AnimationTarget { scale: 1.2, pos: HOME });
    }

    #[test]
    fn selection_overrides_hover_and_home() {
        let mut v = PlanetVisual::new(HOME);
        assert_eq!(v.target(true), AnimationTarget { scale: 3.0, pos: Vec3::ZERO });
        v.set_hovered(true);
        assert_eq!(v.target(true), AnimationTarget { scale: 3.0, pos: Vec3::ZERO });
    }

    #[test]
    fn light_intensity_all_combinations() {
        let size = 1.5;
        assert_eq!(light_intensity(size, false, false), 150.0);
        assert_eq!(light_intensity(size, true, false), 180.0);
        assert_eq!(light_intensity(size, false, true), 180.0);
        assert_eq!(light_intensity(size, true, true), 180.0);
    }
}
