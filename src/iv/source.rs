// 获取来源约束模块
// 开发心理：不同获取渠道有各自的等级窗口和IV保底，可作为额外的搜索收窄条件
// 设计原则：预设表数据驱动，来源缺失不施加任何约束

use serde::{Deserialize, Serialize};

/// 宝可梦的获取渠道。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterSource {
    /// 野生捕获
    Wild,
    /// 天气加成下的野生捕获
    WildBoosted,
    /// 团体战、调查奖励等固定等级渠道
    RaidOrResearch,
    /// 孵蛋
    Egg,
    /// 普通交换
    Trade,
    /// 幸运交换
    Lucky,
}

/// 渠道施加的约束：等级窗口 + 每轴IV保底。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceConstraints {
    pub level_min: f64,
    pub level_max: f64,
    pub iv_floor: u8,
}

impl EncounterSource {
    pub fn constraints(self) -> SourceConstraints {
        match self {
            EncounterSource::Wild => {
                SourceConstraints { level_min: 1.0, level_max: 30.0, iv_floor: 0 }
            }
            EncounterSource::WildBoosted => {
                SourceConstraints { level_min: 6.0, level_max: 35.0, iv_floor: 0 }
            }
            EncounterSource::RaidOrResearch => {
                SourceConstraints { level_min: 15.0, level_max: 25.0, iv_floor: 10 }
            }
            EncounterSource::Egg => {
                SourceConstraints { level_min: 20.0, level_max: 20.0, iv_floor: 10 }
            }
            EncounterSource::Trade => {
                SourceConstraints { level_min: 1.0, level_max: 50.0, iv_floor: 0 }
            }
            EncounterSource::Lucky => {
                SourceConstraints { level_min: 1.0, level_max: 50.0, iv_floor: 12 }
            }
        }
    }

    /// 解析外部来源键。不认识的键返回`None`，即无约束。
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "wild" => Some(EncounterSource::Wild),
            "wild_boosted" => Some(EncounterSource::WildBoosted),
            "raid_research" => Some(EncounterSource::RaidOrResearch),
            "egg" => Some(EncounterSource::Egg),
            "trade" => Some(EncounterSource::Trade),
            "lucky" => Some(EncounterSource::Lucky),
            _ => None,
        }
    }
}
