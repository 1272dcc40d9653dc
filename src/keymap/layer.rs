use core::ops::BitOr;

use super::Layer;

/// One bit per enabled layer, as the host keeps its layer stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(pub u32);

impl LayerState {
    pub const fn of(layer: Layer) -> Self {
        LayerState(1 << layer as u32)
    }

    /// Index of the highest enabled layer, 0 if none are
    pub const fn highest(self) -> u8 {
        match self.0 {
            0 => 0,
            bits => (31 - bits.leading_zeros()) as u8,
        }
    }

    /// An empty state still has the base layer on
    pub const fn is_on(self, layer: Layer) -> bool {
        match self.0 {
            0 => layer as u8 == 0,
            bits => bits & (1 << layer as u32) != 0,
        }
    }

    pub const fn with(self, layer: Layer) -> Self {
        LayerState(self.0 | Self::of(layer).0)
    }
}

impl BitOr for LayerState {
    type Output = LayerState;

    fn bitor(self, rhs: LayerState) -> LayerState {
        LayerState(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_layer() {
        assert_eq!(LayerState(0).highest(), 0);
        assert_eq!(LayerState::of(Layer::ColemakDh).highest(), 0);
        assert_eq!(LayerState::of(Layer::Sym).highest(), 1);
        assert_eq!(
            LayerState::of(Layer::Sym).with(Layer::Nav).highest(),
            Layer::Nav as u8
        );
        assert_eq!(LayerState(1 << 7).highest(), 7);
        assert_eq!(LayerState(u32::MAX).highest(), 31);
    }

    #[test]
    fn empty_state_is_base() {
        assert!(LayerState(0).is_on(Layer::ColemakDh));
        assert!(!LayerState(0).is_on(Layer::Sym));
        assert!(!LayerState::of(Layer::Nav).is_on(Layer::ColemakDh));
        assert!(LayerState::of(Layer::Nav).is_on(Layer::Nav));
    }

    #[test]
    fn union() {
        let state = LayerState::of(Layer::ColemakDh) | LayerState::of(Layer::Nav);
        assert_eq!(state, LayerState(0b101));
        assert!(state.is_on(Layer::ColemakDh));
        assert!(!state.is_on(Layer::Sym));
    }
}
