//! Declarative animation variants.
//!
//! A variant is a named visual state (opacity, vertical offset, scale) plus
//! the duration of the transition *into* that state. Components pick a
//! variant name per render and [`MotionVariant::style`] turns it into inline
//! CSS, letting the browser run the transition.

/// A single visual state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVariant {
    pub opacity: f32,
    /// Vertical offset in pixels; negative moves the element up.
    pub y: f32,
    pub scale: f32,
    /// Seconds spent transitioning into this state.
    pub duration: f32,
}

impl MotionVariant {
    /// Fully visible, untransformed, instant.
    pub const NEUTRAL: MotionVariant = MotionVariant {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
        duration: 0.0,
    };

    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    pub const fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub const fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub const fn with_duration(self, duration: f32) -> Self {
        Self { duration, ..self }
    }

    /// Inline CSS for this state.
    pub fn style(&self) -> String {
        let d = self.duration;
        format!(
            "opacity: {}; transform: translateY({}px) scale({}); \
             transition: opacity {d}s ease-out, transform {d}s ease-out;",
            self.opacity, self.y, self.scale,
        )
    }
}

impl Default for MotionVariant {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Named variants for one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantTable(pub &'static [(&'static str, MotionVariant)]);

impl VariantTable {
    pub fn get(&self, name: &str) -> Option<&MotionVariant> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, variant)| variant)
    }

    /// Inline CSS for `name`, empty when the table has no such variant.
    pub fn style(&self, name: &str) -> String {
        self.get(name).map(MotionVariant::style).unwrap_or_default()
    }
}

/// Pick the variant an element should show.
///
/// Before mount completes the `initial` variant wins (when there is one).
/// Afterwards a hovered element shows `while_hover`, otherwise `animate`.
pub fn active_variant(
    mounted: bool,
    hovered: bool,
    initial: Option<&'static str>,
    animate: &'static str,
    while_hover: Option<&'static str>,
) -> &'static str {
    match (mounted, initial, hovered, while_hover) {
        (false, Some(initial), _, _) => initial,
        (_, _, true, Some(hover)) => hover,
        _ => animate,
    }
}
