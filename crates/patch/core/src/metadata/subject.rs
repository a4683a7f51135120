//! Host-side identities the lookups are keyed on.

/// An item as seen by the object override lookup.
pub trait ItemSubject {
    /// Index of the item's sprite on its sheet.
    fn sprite_index(&self) -> i32;

    /// Whether the sprite lives on the big craftable sheet.
    fn is_big_craftable(&self) -> bool;
}

/// A character as seen by the character override lookup.
pub trait CharacterSubject {
    fn name(&self) -> &str;
}

impl CharacterSubject for str {
    fn name(&self) -> &str {
        self
    }
}

impl CharacterSubject for String {
    fn name(&self) -> &str {
        self
    }
}

/// Plain item identity for hosts and tools without their own item type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub sprite_index: i32,
    pub big_craftable: bool,
}

impl ObjectRef {
    pub const fn object(sprite_index: i32) -> Self {
        Self {
            sprite_index,
            big_craftable: false,
        }
    }

    pub const fn big_craftable(sprite_index: i32) -> Self {
        Self {
            sprite_index,
            big_craftable: true,
        }
    }
}

impl ItemSubject for ObjectRef {
    fn sprite_index(&self) -> i32 {
        self.sprite_index
    }

    fn is_big_craftable(&self) -> bool {
        self.big_craftable
    }
}
