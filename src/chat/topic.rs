//! Topic labels and the keyword rule table.

use serde::{Deserialize, Serialize};

/// Conversational category a message is routed to.
///
/// Declaration order matters: the classifier walks labels in this order and
/// earlier labels win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopicLabel {
    /// Choosing or planning a career direction.
    CareerPath,
    /// Identifying strengths and skill gaps.
    SkillAssessment,
    /// Resumes, CVs and cover letters.
    ResumeHelp,
    /// Preparing for interviews.
    InterviewPrep,
    /// Pay, offers and negotiation.
    SalaryInfo,
    /// Degrees, courses and certifications.
    Education,
    /// Building professional connections.
    Networking,
    /// Stress, burnout and balance.
    WorkLifeBalance,
    /// Switching fields or roles.
    CareerChange,
    /// Finding and applying for jobs.
    JobSearch,
    /// Nothing specific matched.
    General,
}

impl TopicLabel {
    /// Every label, in declaration order.
    pub const ALL: [TopicLabel; 11] = [
        Self::CareerPath,
        Self::SkillAssessment,
        Self::ResumeHelp,
        Self::InterviewPrep,
        Self::SalaryInfo,
        Self::Education,
        Self::Networking,
        Self::WorkLifeBalance,
        Self::CareerChange,
        Self::JobSearch,
        Self::General,
    ];

    /// String tag of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CareerPath => "careerPath",
            Self::SkillAssessment => "skillAssessment",
            Self::ResumeHelp => "resumeHelp",
            Self::InterviewPrep => "interviewPrep",
            Self::SalaryInfo => "salaryInfo",
            Self::Education => "education",
            Self::Networking => "networking",
            Self::WorkLifeBalance => "workLifeBalance",
            Self::CareerChange => "careerChange",
            Self::JobSearch => "jobSearch",
            Self::General => "general",
        }
    }

    /// Keywords scored for this label; empty for `general`.
    pub fn keywords(&self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|rule| rule.label == *self)
            .map(|rule| rule.keywords)
            .unwrap_or(&[])
    }

    /// Whether this is the catch-all label.
    pub fn is_general(&self) -> bool {
        matches!(self, Self::General)
    }
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TopicLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid topic label: {}", s))
    }
}

/// Keyword set owned by one topic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Label the rule votes for.
    pub label: TopicLabel,
    /// Lower-case substrings counted in the query.
    pub keywords: &'static [&'static str],
}

/// Rule table for the ten specific labels, in declaration order.
pub static RULES: [ClassificationRule; 10] = [
    ClassificationRule {
        label: TopicLabel::CareerPath,
        keywords: &[
            "career path",
            "career options",
            "job options",
            "profession",
            "industry",
            "field",
        ],
    },
    ClassificationRule {
        label: TopicLabel::SkillAssessment,
        keywords: &[
            "skill",
            "assessment",
            "strengths",
            "abilities",
            "competencies",
            "talents",
        ],
    },
    ClassificationRule {
        label: TopicLabel::ResumeHelp,
        keywords: &["resume", "cv", "cover letter", "application", "portfolio"],
    },
    ClassificationRule {
        label: TopicLabel::InterviewPrep,
        keywords: &["interview", "prepare", "question", "hiring", "recruiter"],
    },
    ClassificationRule {
        label: TopicLabel::SalaryInfo,
        keywords: &[
            "salary",
            "compensation",
            "pay",
            "negotiation",
            "offer",
            "benefits",
            "package",
        ],
    },
    ClassificationRule {
        label: TopicLabel::Education,
        keywords: &[
            "education",
            "degree",
            "certification",
            "course",
            "training",
            "learn",
            "study",
        ],
    },
    ClassificationRule {
        label: TopicLabel::Networking,
        keywords: &[
            "network",
            "connection",
            "linkedin",
            "contact",
            "referral",
            "recommendation",
        ],
    },
    ClassificationRule {
        label: TopicLabel::WorkLifeBalance,
        keywords: &[
            "balance",
            "burnout",
            "stress",
            "remote",
            "flexible",
            "hours",
            "schedule",
        ],
    },
    ClassificationRule {
        label: TopicLabel::CareerChange,
        keywords: &[
            "change",
            "transition",
            "switch",
            "pivot",
            "new direction",
            "different field",
        ],
    },
    ClassificationRule {
        label: TopicLabel::JobSearch,
        keywords: &[
            "search",
            "find",
            "hunting",
            "applying",
            "application",
            "opportunity",
        ],
    },
];
