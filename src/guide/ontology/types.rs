//! Context and tag types
//!
//!     Wire names are part of the serialized tree and must not change: note the
//!     underscores in `Certifying_Agency`, `AP_Exam` and friends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declared domain of a whole document. Selects the ontology row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextType {
    Colleges,
    Certifications,
    EntranceExams,
    APExams,
    UserGeneratedContent,
    DoD,
    Encyclopedia,
    #[default]
    None,
}

impl ContextType {
    pub const ALL: [ContextType; 8] = [
        ContextType::Colleges,
        ContextType::Certifications,
        ContextType::EntranceExams,
        ContextType::APExams,
        ContextType::UserGeneratedContent,
        ContextType::DoD,
        ContextType::Encyclopedia,
        ContextType::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContextType::Colleges => "Colleges",
            ContextType::Certifications => "Certifications",
            ContextType::EntranceExams => "EntranceExams",
            ContextType::APExams => "APExams",
            ContextType::UserGeneratedContent => "UserGeneratedContent",
            ContextType::DoD => "DoD",
            ContextType::Encyclopedia => "Encyclopedia",
            ContextType::None => "None",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ContextType::None
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown context type: {0}")]
pub struct UnknownContextType(pub String);

impl FromStr for ContextType {
    type Err = UnknownContextType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContextType::ALL
            .iter()
            .copied()
            .find(|ctx| ctx.as_str() == s)
            .ok_or_else(|| UnknownContextType(s.to_string()))
    }
}

/// The category a tag plays at its depth, e.g. `University` or `Course`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagType {
    Category,
    SubCategory,
    University,
    Region,
    Department,
    Course,
    Topic,
    UserFolder,
    UserTopic,
    #[serde(rename = "Certifying_Agency")]
    CertifyingAgency,
    Certification,
    Domain,
    Module,
    #[serde(rename = "Entrance_Exam")]
    EntranceExam,
    #[serde(rename = "AP_Exam")]
    APExam,
    UserContent,
    Branch,
    #[serde(rename = "Instruction_Type")]
    InstructionType,
    #[serde(rename = "Instruction_Group")]
    InstructionGroup,
    Instruction,
    Chapter,
    Section,
    Part,
    Volume,
    Range,
    #[default]
    None,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Category => "Category",
            TagType::SubCategory => "SubCategory",
            TagType::University => "University",
            TagType::Region => "Region",
            TagType::Department => "Department",
            TagType::Course => "Course",
            TagType::Topic => "Topic",
            TagType::UserFolder => "UserFolder",
            TagType::UserTopic => "UserTopic",
            TagType::CertifyingAgency => "Certifying_Agency",
            TagType::Certification => "Certification",
            TagType::Domain => "Domain",
            TagType::Module => "Module",
            TagType::EntranceExam => "Entrance_Exam",
            TagType::APExam => "AP_Exam",
            TagType::UserContent => "UserContent",
            TagType::Branch => "Branch",
            TagType::InstructionType => "Instruction_Type",
            TagType::InstructionGroup => "Instruction_Group",
            TagType::Instruction => "Instruction",
            TagType::Chapter => "Chapter",
            TagType::Section => "Section",
            TagType::Part => "Part",
            TagType::Volume => "Volume",
            TagType::Range => "Range",
            TagType::None => "None",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == TagType::None
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
