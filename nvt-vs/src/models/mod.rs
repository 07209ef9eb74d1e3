//! Data models for the verification service

pub mod article;
pub mod report;
pub mod verdict;

pub use article::{CandidateArticle, FeedTag};
pub use report::{AnalysisSummary, VerificationReport};
pub use verdict::{Confidence, Verdict, VerdictLabel};
