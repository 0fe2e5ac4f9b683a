//! Tooth catalog - the fixed table of 32 teeth and their care tips
//!
//! Records are generated once from two static lists: anatomical names in
//! Universal numbering order, and eight pregnancy care tips cycled across
//! the teeth.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Number of teeth in an adult arch pair
pub const TOOTH_COUNT: usize = 32;

/// Number of teeth in a single arch
pub const ARCH_SIZE: usize = 16;

/// Number of distinct care tips
pub const TIP_COUNT: usize = 8;

/// Anatomical names, Universal numbering (1 = upper right third molar)
pub const TOOTH_NAMES: [&str; TOOTH_COUNT] = [
    "Upper Right Third Molar",
    "Upper Right Second Molar",
    "Upper Right First Molar",
    "Upper Right Second Premolar",
    "Upper Right First Premolar",
    "Upper Right Canine",
    "Upper Right Lateral Incisor",
    "Upper Right Central Incisor",
    "Upper Left Central Incisor",
    "Upper Left Lateral Incisor",
    "Upper Left Canine",
    "Upper Left First Premolar",
    "Upper Left Second Premolar",
    "Upper Left First Molar",
    "Upper Left Second Molar",
    "Upper Left Third Molar",
    "Lower Left Third Molar",
    "Lower Left Second Molar",
    "Lower Left First Molar",
    "Lower Left Second Premolar",
    "Lower Left First Premolar",
    "Lower Left Canine",
    "Lower Left Lateral Incisor",
    "Lower Left Central Incisor",
    "Lower Right Central Incisor",
    "Lower Right Lateral Incisor",
    "Lower Right Canine",
    "Lower Right First Premolar",
    "Lower Right Second Premolar",
    "Lower Right First Molar",
    "Lower Right Second Molar",
    "Lower Right Third Molar",
];

/// Pregnancy dental care tips, assigned to teeth by `index mod 8`
pub const CARE_TIPS: [&str; TIP_COUNT] = [
    "Brush twice a day with fluoride toothpaste. Pregnancy hormones make gums more prone to gingivitis.",
    "Floss once a day to clear plaque between teeth, where pregnancy gingivitis usually starts.",
    "After morning sickness, rinse with water or a baking soda solution and wait before brushing to protect your enamel.",
    "Keep sugary snacks to mealtimes. Frequent cravings feed the bacteria that cause cavities.",
    "Book a routine cleaning in the second trimester, the most comfortable time for dental visits.",
    "Tell your dentist you are pregnant. Routine X-rays are usually postponed, and a lead apron is used if one is needed.",
    "Drink fluoridated water and eat calcium-rich foods to support your baby's developing teeth.",
    "See your dentist if your gums swell, bleed easily or develop a small growth during pregnancy.",
];

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::generate(&TOOTH_NAMES, &CARE_TIPS));

/// The process-wide tooth catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToothIdError {
    #[error("Tooth number {0} is outside 1..=32")]
    OutOfRange(u32),
    #[error("Invalid tooth number: {0:?}")]
    Invalid(String),
}

/// Universal tooth number, always within 1..=32
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToothId(u8);

impl ToothId {
    pub const FIRST: ToothId = ToothId(1);
    pub const LAST: ToothId = ToothId(TOOTH_COUNT as u8);

    pub fn new(value: u32) -> Result<Self, ToothIdError> {
        if (1..=TOOTH_COUNT as u32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ToothIdError::OutOfRange(value))
        }
    }

    /// Build from a zero-based catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index + 1).ok().and_then(|v| Self::new(v).ok())
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the catalog
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    pub fn is_upper(self) -> bool {
        self.index() < ARCH_SIZE
    }

    /// Position within its own arch, 0..16
    pub fn arch_index(self) -> usize {
        self.index() % ARCH_SIZE
    }

    pub fn all() -> impl Iterator<Item = ToothId> {
        (1..=TOOTH_COUNT as u8).map(ToothId)
    }
}

impl fmt::Display for ToothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToothId {
    type Err = ToothIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ToothIdError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

/// Anatomical kind, used to pick a placeholder shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToothKind {
    Molar,
    Premolar,
    Canine,
    Incisor,
}

impl ToothKind {
    pub fn of(id: ToothId) -> Self {
        let i = id.arch_index();
        // Distance from the back of the arch; both arches are symmetric
        match i.min(ARCH_SIZE - 1 - i) {
            0..=2 => ToothKind::Molar,
            3..=4 => ToothKind::Premolar,
            5 => ToothKind::Canine,
            _ => ToothKind::Incisor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToothKind::Molar => "Molar",
            ToothKind::Premolar => "Premolar",
            ToothKind::Canine => "Canine",
            ToothKind::Incisor => "Incisor",
        }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToothRecord {
    pub id: ToothId,
    pub name: String,
    pub tip: &'static str,
}

impl ToothRecord {
    pub fn kind(&self) -> ToothKind {
        ToothKind::of(self.id)
    }

    /// Lowercased text the search filter matches against
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.tip).to_lowercase()
    }
}

/// Ordered, immutable table of tooth records
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ToothRecord>,
}

impl Catalog {
    /// Generate the 32 records from a name list and the tip list.
    ///
    /// Names missing from a short list fall back to `"Tooth {id}"`.
    pub fn generate(names: &[&str], tips: &[&'static str; TIP_COUNT]) -> Self {
        let records = ToothId::all()
            .map(|id| {
                let index = id.index();
                let name = names
                    .get(index)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("Tooth {}", id));
                ToothRecord {
                    id,
                    name,
                    tip: tips[index % TIP_COUNT],
                }
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[ToothRecord] {
        &self.records
    }

    pub fn get(&self, id: ToothId) -> Option<&ToothRecord> {
        self.records.get(id.index()).filter(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToothRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_sequential_and_unique() {
        let catalog = catalog();
        assert_eq!(catalog.len(), TOOTH_COUNT);

        let ids: HashSet<u8> = catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids.len(), TOOTH_COUNT);

        for (index, record) in catalog.iter().enumerate() {
            assert_eq!(record.id.get() as usize, index + 1);
            assert!(!record.name.is_empty());
        }
    }

    #[test]
    fn test_tips_cycle_by_index() {
        for record in catalog().iter() {
            assert!(CARE_TIPS.contains(&record.tip));
            assert_eq!(record.tip, CARE_TIPS[(record.id.get() as usize - 1) % TIP_COUNT]);
        }
    }

    #[test]
    fn test_short_name_list_falls_back() {
        let catalog = Catalog::generate(&TOOTH_NAMES[..2], &CARE_TIPS);
        assert_eq!(catalog.len(), TOOTH_COUNT);
        assert_eq!(catalog.records()[1].name, "Upper Right Second Molar");
        assert_eq!(catalog.records()[2].name, "Tooth 3");
        assert_eq!(catalog.records()[31].name, "Tooth 32");
    }

    #[test]
    fn test_first_and_last_lookup() {
        let first = catalog().get(ToothId::FIRST).unwrap();
        let last = catalog().get(ToothId::LAST).unwrap();
        assert_eq!(first.name, "Upper Right Third Molar");
        assert_eq!(last.name, "Lower Right Third Molar");
        assert_ne!(first, last);
    }

    #[test]
    fn test_tooth_id_range() {
        assert!(ToothId::new(0).is_err());
        assert!(ToothId::new(1).is_ok());
        assert!(ToothId::new(32).is_ok());
        assert_eq!(ToothId::new(33), Err(ToothIdError::OutOfRange(33)));
        assert_eq!(ToothId::from_index(31), Some(ToothId::LAST));
        assert_eq!(ToothId::from_index(32), None);
    }

    #[test]
    fn test_tooth_id_parse() {
        assert_eq!(" 12 ".parse::<ToothId>().unwrap().get(), 12);
        assert!(matches!("abc".parse::<ToothId>(), Err(ToothIdError::Invalid(_))));
        assert!(matches!("40".parse::<ToothId>(), Err(ToothIdError::OutOfRange(40))));
    }

    #[test]
    fn test_tooth_kinds_mirror() {
        let kind = |n| ToothKind::of(ToothId::new(n).unwrap());
        assert_eq!(kind(1), ToothKind::Molar);
        assert_eq!(kind(4), ToothKind::Premolar);
        assert_eq!(kind(6), ToothKind::Canine);
        assert_eq!(kind(8), ToothKind::Incisor);
        assert_eq!(kind(11), ToothKind::Canine);
        assert_eq!(kind(16), ToothKind::Molar);
        assert_eq!(kind(22), ToothKind::Canine);
        assert_eq!(kind(25), ToothKind::Incisor);
        assert_eq!(kind(32), ToothKind::Molar);

        // Names agree with the computed kind
        for record in catalog().iter() {
            assert!(record.name.contains(record.kind().label()), "{}", record.name);
        }
    }
}
