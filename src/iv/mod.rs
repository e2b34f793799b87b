// IV推断内核
// 开发心理：六个纯函数组件按数据流组装——费用与评估先收窄搜索空间，
// 模型逐点判定，最后全序排列；内核不做任何I/O

pub mod appraisal;
pub mod cpm;
pub mod engine;
pub mod model;
pub mod rating;
pub mod source;
pub mod stardust;

pub use appraisal::{AppraisalBucket, AppraisalFilter};
pub use engine::{enumerate, enumerate_and_rank, rank, MatchedSpread, Observation};
pub use model::{evaluate, BaseStats, CombatStats, IvTriple};
pub use rating::{quality_percent, Rating, Summary};
pub use source::EncounterSource;
pub use stardust::{resolve_level_range, DustBand};
