// Ports the engine consumes from its collaborators.

/// Viewport dimensions in the same units as entity positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Accepts only positive, finite dimensions.
    pub fn checked(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then(|| Self::new(width, height))
    }
}

// Port for reading the current viewport. Implementations are read on every use and
// may return None while the presentation layer has not reported a size yet.
pub trait Viewport: Send + Sync {
    fn size(&self) -> Option<ViewportSize>;
}

impl<V: Viewport + ?Sized> Viewport for std::sync::Arc<V> {
    fn size(&self) -> Option<ViewportSize> {
        (**self).size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_degenerate_sizes() {
        assert_eq!(
            ViewportSize::checked(640.0, 480.0),
            Some(ViewportSize::new(640.0, 480.0))
        );
        assert_eq!(ViewportSize::checked(0.0, 480.0), None);
        assert_eq!(ViewportSize::checked(640.0, -1.0), None);
        assert_eq!(ViewportSize::checked(f32::INFINITY, 480.0), None);
        assert_eq!(ViewportSize::checked(640.0, f32::NAN), None);
    }
}
