/// Raster byte for cells outside the explored map.
pub const OUTSIDE: u8 = 0x00;
/// Raster byte for scanned, free floor.
pub const SCAN: u8 = 0x01;
/// Raster byte for area discovered in the current run.
pub const NEW_DISCOVERED_AREA: u8 = 0x02;
/// Raster byte for walls and obstacles.
pub const WALL: u8 = 0xFF;

/// Lowest and highest plain room id.
pub const ROOM_MIN: u8 = 10;
pub const ROOM_MAX: u8 = 59;
/// Lowest and highest byte of a room marked selected (cleaned).
pub const SELECTED_ROOM_MIN: u8 = 60;
pub const SELECTED_ROOM_MAX: u8 = 109;

/// Number of distinct room ids.
pub const ROOM_COUNT: usize = (ROOM_MAX - ROOM_MIN + 1) as usize;

/// What one raster byte means.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    Outside,
    Wall,
    Scan,
    NewlyDiscovered,
    /// Floor belonging to room `id` (10..=59). `selected` rooms have been
    /// cleaned in the current run.
    Room { id: u8, selected: bool },
    Unknown(u8),
}

impl CellClass {
    /// Classify a raster byte.
    #[inline]
    pub const fn classify(byte: u8) -> Self {
        match byte {
            OUTSIDE => Self::Outside,
            SCAN => Self::Scan,
            NEW_DISCOVERED_AREA => Self::NewlyDiscovered,
            WALL => Self::Wall,
            ROOM_MIN..=ROOM_MAX => Self::Room {
                id: byte,
                selected: false,
            },
            SELECTED_ROOM_MIN..=SELECTED_ROOM_MAX => Self::Room {
                id: byte - SELECTED_ROOM_MIN + ROOM_MIN,
                selected: true,
            },
            other => Self::Unknown(other),
        }
    }

    /// Room id for room cells, selected or not.
    pub const fn room_id(self) -> Option<u8> {
        match self {
            Self::Room { id, .. } => Some(id),
            _ => None,
        }
    }
}
