/// Semantic classification of a point in the level's collision raster.
///
/// Codes follow the level editor's IntGrid values. Unknown codes are kept as
/// [`TileKind::Custom`] and behave like empty space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    /// Anything beyond the level bounds.
    Outside,
    #[default]
    Empty,
    Dirt,
    Ladder,
    Stone,
    Custom(i32),
}

impl TileKind {
    pub const OUTSIDE_CODE: i32 = -1;
    pub const EMPTY_CODE: i32 = 0;
    pub const DIRT_CODE: i32 = 1;
    pub const LADDER_CODE: i32 = 2;
    pub const STONE_CODE: i32 = 3;

    pub const fn from_code(code: i32) -> Self {
        match code {
            Self::OUTSIDE_CODE => Self::Outside,
            Self::EMPTY_CODE => Self::Empty,
            Self::DIRT_CODE => Self::Dirt,
            Self::LADDER_CODE => Self::Ladder,
            Self::STONE_CODE => Self::Stone,
            other => Self::Custom(other),
        }
    }

    pub const fn code(self) -> i32 {
        match self {
            Self::Outside => Self::OUTSIDE_CODE,
            Self::Empty => Self::EMPTY_CODE,
            Self::Dirt => Self::DIRT_CODE,
            Self::Ladder => Self::LADDER_CODE,
            Self::Stone => Self::STONE_CODE,
            Self::Custom(code) => code,
        }
    }

    /// Blocks horizontal and falling movement.
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Outside | Self::Dirt | Self::Stone)
    }

    /// Supports climbing.
    pub const fn is_ladder(self) -> bool {
        matches!(self, Self::Ladder)
    }
}

impl From<i32> for TileKind {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_and_ladder_predicates_cover_every_kind() {
        let cases = [
            (TileKind::Outside, true, false),
            (TileKind::Empty, false, false),
            (TileKind::Dirt, true, false),
            (TileKind::Ladder, false, true),
            (TileKind::Stone, true, false),
            (TileKind::Custom(42), false, false),
        ];
        for (kind, solid, ladder) in cases {
            assert_eq!(kind.is_solid(), solid, "{kind}");
            assert_eq!(kind.is_ladder(), ladder, "{kind}");
        }
    }

    #[test]
    fn codes_map_to_kinds() {
        assert_eq!(TileKind::from_code(-1), TileKind::Outside);
        assert_eq!(TileKind::from_code(2), TileKind::Ladder);
        assert_eq!(TileKind::from_code(7), TileKind::Custom(7));
        assert_eq!(TileKind::Stone.code(), 3);
    }
}
