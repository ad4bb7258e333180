use crate::config::DRatings;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    APlus,
    A,
    BPlus,
    B,
    CPlus,
    C,
    DPlus,
    D,
    F,
}

impl Rating {
    pub const ALL: [Rating; 9] = [
        Rating::APlus,
        Rating::A,
        Rating::BPlus,
        Rating::B,
        Rating::CPlus,
        Rating::C,
        Rating::DPlus,
        Rating::D,
        Rating::F,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rating::APlus => "A+",
            Rating::A => "A",
            Rating::BPlus => "B+",
            Rating::B => "B",
            Rating::CPlus => "C+",
            Rating::C => "C",
            Rating::DPlus => "D+",
            Rating::D => "D",
            Rating::F => "F",
        }
    }

    /// Grade points for averaging. `None` means the rating adds nothing to the sum
    /// but still counts towards the number of grades.
    pub fn points(self, d_ratings: DRatings) -> Option<f64> {
        match self {
            Rating::APlus => Some(4.5),
            Rating::A => Some(4.0),
            Rating::BPlus => Some(3.5),
            Rating::B => Some(3.0),
            Rating::CPlus => Some(2.5),
            Rating::C => Some(2.0),
            Rating::DPlus | Rating::D if d_ratings == DRatings::Unscored => None,
            Rating::DPlus => Some(1.5),
            Rating::D => Some(1.0),
            Rating::F => Some(0.0),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub subject: String,
    pub rating: Option<Rating>,
}

impl Grade {
    pub fn new(subject: impl Into<String>, rating: Rating) -> Self {
        Self {
            subject: subject.into(),
            rating: Some(rating),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    // Empty until the first grade is added
    pub grades: Vec<Grade>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }
}
