use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Largest sub-code a category can hold; identifiers are `category * 100 + subcode`.
pub const MAX_SUBCODE: u8 = 99;

/// Largest category id the identifier scheme leaves room for.
pub const MAX_CATEGORY_ID: u8 = 9;

/// Top-level error classes shared across firmware products. The ids are
/// fixed by the company-wide error guidelines and must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Motors, axes, tower, tilt.
    Mechanical = 1,
    /// Thermistors, heaters, fans.
    Temperature = 2,
    /// Boards, power supply, motion controller.
    Electrical = 3,
    /// Wi-Fi, LAN, cloud.
    Connectivity = 4,
    /// Operating system, storage, updates.
    System = 5,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mechanical,
        Category::Temperature,
        Category::Electrical,
        Category::Connectivity,
        Category::System,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Mechanical => "mechanical",
            Category::Temperature => "temperature",
            Category::Electrical => "electrical",
            Category::Connectivity => "connectivity",
            Category::System => "system",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Category {
    type Error = RangeError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Category::ALL
            .into_iter()
            .find(|c| i32::from(c.id()) == id)
            .ok_or(RangeError::Category { id })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("error category {id} out of range")]
    Category { id: i32 },
    #[error("error subcode {subcode} out of range")]
    Subcode { subcode: i32 },
}

/// One error/warning definition.
///
/// Equality, ordering and hashing only look at [`Code::identifier`]; two
/// codes with the same identifier but different messages compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Code {
    category: Category,
    subcode: u8,
    message: Option<&'static str>,
}

impl Code {
    /// Build a code for a static table. An out-of-range subcode fails
    /// constant evaluation, so a bad table never compiles.
    pub const fn define(category: Category, subcode: u8, message: Option<&'static str>) -> Self {
        assert!(subcode <= MAX_SUBCODE, "error subcode out of range");
        Code { category, subcode, message }
    }

    pub fn new(category: Category, subcode: i32, message: Option<&'static str>) -> Result<Self, RangeError> {
        let id = i32::from(category.id());
        if !(0..=i32::from(MAX_CATEGORY_ID)).contains(&id) {
            return Err(RangeError::Category { id });
        }
        let subcode = u8::try_from(subcode)
            .ok()
            .filter(|s| *s <= MAX_SUBCODE)
            .ok_or(RangeError::Subcode { subcode })?;
        Ok(Code { category, subcode, message })
    }

    /// Like [`Code::new`], but takes the category as a raw id.
    pub fn from_raw(category_id: i32, subcode: i32, message: Option<&'static str>) -> Result<Self, RangeError> {
        Code::new(Category::try_from(category_id)?, subcode, message)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcode(&self) -> u8 {
        self.subcode
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// The three-digit numeric value published to users and other tools.
    pub const fn identifier(&self) -> u16 {
        self.category.id() as u16 * 100 + self.subcode as u16
    }

    /// Verbose single-line rendering for diagnostics.
    pub fn describe(&self) -> String {
        format!(
            "Code: Category: {} Value: {} Code: {} Message: {}",
            self.category,
            self.subcode,
            self.identifier(),
            self.message.unwrap_or("None"),
        )
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Code {}

impl PartialOrd for Code {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Code {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier().cmp(&other.identifier())
    }
}

impl Hash for Code {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier().hash(state);
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code: {}", self.identifier())?;
        if let Some(message) = self.message {
            write!(f, " ({message})")?;
        }
        Ok(())
    }
}

impl From<Code> for u16 {
    fn from(code: Code) -> u16 {
        code.identifier()
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> i32 {
        i32::from(code.identifier())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Code", 2)?;
        s.serialize_field("code", &self.identifier())?;
        s.serialize_field("message", &self.message)?;
        s.end()
    }
}
