//! Kind definitions - the per-kind physics parameter table
//!
//! One entry per paintable cell kind. The compiled-in table is the default
//! content; `KindRegistry` can replace it wholesale from a JSON bundle.

/// Cell kind identifier (0 = empty slot)
pub type KindId = u8;

pub const K_EMPTY: KindId = 0;
pub const K_GRASS: KindId = 1;
pub const K_SAND: KindId = 2;
pub const K_STONE: KindId = 3;
pub const K_BLOCK: KindId = 4;
pub const K_FIRE: KindId = 5;
// Reserved: carries explosion parameters, no behavior reads them yet.
pub const K_DYNAMITE: KindId = 6;

pub const KIND_COUNT: usize = 7;

/// Which update rule a kind runs each tick
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KindClass {
    /// Empty slot - nothing to simulate
    None,
    /// Never moves (Block)
    Static,
    /// Gravity cell: settle / slide / fall
    Faller,
    /// Finite lifetime, spreads and dies (Fire)
    Decay,
}

/// Physical parameters of a cell kind.
///
/// `life_span == 0` means the kind does not decay. A decaying kind never
/// uses gravity - the two update modes are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindProps {
    /// Packed ABGR base color; per-cell variation is applied on paint
    pub color: u32,
    pub uses_gravity: bool,
    /// How many cells sideways a settling cell scans for a lower resting spot
    pub slip: i32,
    /// Decay ticks for freshly painted cells; 0 = does not decay
    pub life_span: u16,
    pub flammable: bool,
    /// Deletes fire on contact instead of burning
    pub extinguishes: bool,
    /// Reserved for explosions, unused
    pub explosion_radius: u8,
    /// Reserved for explosions, unused
    pub blast_resistance: u8,
}

pub const FIRE_LIFE_SPAN: u16 = 20;

/// Default kind table, indexed by `KindId`
pub static KIND_DATA: [KindProps; KIND_COUNT] = [
    // empty
    KindProps {
        color: 0xFFFF_FFFF,
        uses_gravity: false,
        slip: 0,
        life_span: 0,
        flammable: false,
        extinguishes: false,
        explosion_radius: 0,
        blast_resistance: 0,
    },
    // grass
    KindProps {
        color: 0xFF00_8000,
        uses_gravity: true,
        slip: 1,
        life_span: 0,
        flammable: true,
        extinguishes: false,
        explosion_radius: 0,
        blast_resistance: 0,
    },
    // sand
    KindProps {
        color: 0xFF5F_B9F5,
        uses_gravity: true,
        slip: 3,
        life_span: 0,
        flammable: false,
        extinguishes: true,
        explosion_radius: 0,
        blast_resistance: 0,
    },
    // stone
    KindProps {
        color: 0xFF82_8282,
        uses_gravity: true,
        slip: 0,
        life_span: 0,
        flammable: false,
        extinguishes: false,
        explosion_radius: 0,
        blast_resistance: 2,
    },
    // block
    KindProps {
        color: 0xFF32_3232,
        uses_gravity: false,
        slip: 0,
        life_span: 0,
        flammable: false,
        extinguishes: false,
        explosion_radius: 0,
        blast_resistance: 3,
    },
    // fire
    KindProps {
        color: 0xFF00_7BF5,
        uses_gravity: false,
        slip: 0,
        life_span: FIRE_LIFE_SPAN,
        flammable: true,
        extinguishes: false,
        explosion_radius: 0,
        blast_resistance: 0,
    },
    // dynamite
    KindProps {
        color: 0xFF30_30C8,
        uses_gravity: true,
        slip: 1,
        life_span: 0,
        flammable: true,
        extinguishes: false,
        explosion_radius: 3,
        blast_resistance: 1,
    },
];

pub static KIND_KEYS: [&str; KIND_COUNT] = [
    "base:empty",
    "base:grass",
    "base:sand",
    "base:stone",
    "base:block",
    "base:fire",
    "base:dynamite",
];

pub static KIND_NAMES: [&str; KIND_COUNT] = [
    "Empty", "Grass", "Sand", "Stone", "Block", "Fire", "Dynamite",
];

/// Derive the update class from the parameters
pub fn class_of_props(props: &KindProps) -> KindClass {
    if props.life_span > 0 {
        KindClass::Decay
    } else if props.uses_gravity {
        KindClass::Faller
    } else {
        KindClass::Static
    }
}

#[inline]
pub fn is_valid_kind_id(id: KindId) -> bool {
    (id as usize) < KIND_COUNT
}

#[inline]
pub fn is_cell(id: KindId) -> bool {
    id != K_EMPTY && is_valid_kind_id(id)
}
