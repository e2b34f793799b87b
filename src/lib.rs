// 宝可梦GO IV推断引擎库入口
// 开发心理：内核是确定性的约束搜索，全部纯函数；外壳只做解析和展示
// 架构：core(错误/配置) + iv(推断内核) + pokemon(种族数据)

pub mod core;
pub mod iv;
pub mod pokemon;

// 重新导出核心类型
pub use crate::core::{IvError, Result, ScannerConfig};
pub use crate::iv::cpm::{multiplier_at, MAX_LEVEL, MIN_LEVEL};
pub use crate::iv::engine::{enumerate_and_rank, MatchedSpread, Observation};
pub use crate::iv::model::{evaluate, BaseStats, CombatStats, IvTriple};
pub use crate::iv::stardust::resolve_level_range;
pub use crate::iv::{AppraisalBucket, AppraisalFilter, EncounterSource, Rating, Summary};
pub use crate::pokemon::{find_by_name, Species};

// 版本信息
pub const VERSION: &str = "0.1.0";
pub const NAME: &str = "pokemongo-iv";

// 领域常量
pub mod constants {
    /// 单轴IV下限
    pub const IV_MIN: u8 = 0;
    /// 单轴IV上限
    pub const IV_MAX: u8 = 15;
    /// 三轴IV总和上限
    pub const IV_TOTAL_MAX: u8 = 45;
    /// CP公式的保底值
    pub const CP_FLOOR: u32 = 10;
    /// 等级步长（半级粒度）
    pub const LEVEL_STEP: f64 = 0.5;
}

// 便利函数
pub fn init() -> Result<()> {
    // 初始化日志系统；重复初始化静默忽略，便于测试环境
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "pokemongo_iv=info");
    }

    let _ = env_logger::try_init();

    log::info!("IV推断引擎初始化完成 v{}", VERSION);
    Ok(())
}
