//! States of the three-state chain.

use crate::error::CtmcError;

/// One of the three chain states, labelled 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChainState {
    One = 1,
    Two = 2,
    Three = 3,
}

impl ChainState {
    /// All three states in label order.
    pub const ALL: [ChainState; 3] = [Self::One, Self::Two, Self::Three];

    /// Returns the 1-based label of this state.
    pub fn label(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this state (`label - 1`).
    pub fn as_index(self) -> usize {
        self as usize - 1
    }

    /// Returns the two other states, lower label first.
    pub fn others(self) -> [ChainState; 2] {
        match self {
            Self::One => [Self::Two, Self::Three],
            Self::Two => [Self::One, Self::Three],
            Self::Three => [Self::One, Self::Two],
        }
    }
}

impl TryFrom<u8> for ChainState {
    type Error = CtmcError;

    fn try_from(label: u8) -> Result<Self, Self::Error> {
        match label {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(CtmcError::InvalidStateLabel { label }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_indices() {
        for (i, s) in ChainState::ALL.iter().enumerate() {
            assert_eq!(s.as_index(), i);
            assert_eq!(s.label() as usize, i + 1);
        }
    }

    #[test]
    fn others_exclude_self_in_order() {
        for s in ChainState::ALL {
            let [a, b] = s.others();
            assert_ne!(a, s);
            assert_ne!(b, s);
            assert!(a.label() < b.label());
        }
    }

    #[test]
    fn try_from_labels() {
        assert_eq!(ChainState::try_from(2), Ok(ChainState::Two));
        assert_eq!(
            ChainState::try_from(0),
            Err(CtmcError::InvalidStateLabel { label: 0 })
        );
        assert!(ChainState::try_from(4).is_err());
    }
}
