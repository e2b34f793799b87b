// IV组合枚举引擎
// 开发心理：假设空间很小（半级×4096组IV），直接穷举所有与观测完全一致的组合
// 设计原则：候选生成写成惰性迭代器管线而不是嵌套循环；轴级提前剪枝只省时间，
// 绝不改变结果集；排序全序且确定

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{IvError, Result};
use crate::iv::appraisal::{self, AppraisalBucket, AppraisalFilter};
use crate::iv::cpm;
use crate::iv::model::{self, BaseStats, IvTriple};
use crate::iv::source::EncounterSource;
use crate::iv::stardust;

/// 每轴IV上限。
pub const IV_MAX: u8 = 15;

/// 三轴IV总和上限。
pub const IV_TOTAL_MAX: u8 = 45;

/// 一次查询的全部观测输入。
///
/// 数值字段的范围校验由外层负责；引擎只守住"结构性缺失"：
/// 零值等同缺失，直接产出空结果而不是报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub cp: u32,
    pub hp: u32,
    pub stardust: u32,
    pub recent_band_only: bool,
    #[serde(default)]
    pub appraisal: AppraisalFilter,
    #[serde(default)]
    pub source: Option<EncounterSource>,
}

impl Observation {
    pub fn new(cp: u32, hp: u32, stardust: u32) -> Self {
        Self {
            cp,
            hp,
            stardust,
            recent_band_only: false,
            appraisal: AppraisalFilter::default(),
            source: None,
        }
    }

    /// 核心边界的输入校验，供直接暴露引擎的调用方使用。
    /// 引擎本身对这些缺失保持全函数语义（返回空序列）。
    pub fn validate(&self) -> Result<()> {
        if self.cp == 0 {
            return Err(IvError::InvalidInput("CP必须为正整数".to_string()));
        }
        if self.hp == 0 {
            return Err(IvError::InvalidInput("HP必须为正整数".to_string()));
        }
        if self.stardust == 0 {
            return Err(IvError::InvalidInput("星尘费用必须为正整数".to_string()));
        }
        Ok(())
    }
}

/// 一个与观测完全一致的IV组合。
/// 每次查询新生成，生成后不再修改。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchedSpread {
    pub level: f64,
    pub iv_attack: u8,
    pub iv_defense: u8,
    pub iv_stamina: u8,
    pub total: u8,
    pub percent: f64,
}

impl MatchedSpread {
    fn new(level: f64, ivs: IvTriple) -> Self {
        let total = ivs.total();
        Self {
            level,
            iv_attack: ivs.attack,
            iv_defense: ivs.defense,
            iv_stamina: ivs.stamina,
            total,
            percent: round1(total as f64 / IV_TOTAL_MAX as f64 * 100.0),
        }
    }
}

// 保留一位小数
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// 单轴候选IV：从保底值起，逐个过评估过滤
fn admitted_axis(bucket: Option<AppraisalBucket>, floor: u8) -> impl Iterator<Item = u8> + Clone {
    (0..=IV_MAX).filter(move |&iv| iv >= floor && appraisal::admits(iv, bucket))
}

// 三轴笛卡尔积，攻击为最外层，与排序的残余次序约定一致。
// 某一轴整体为空时上游flat_map自然短路，这就是轴级提前剪枝。
fn candidate_ivs(filter: AppraisalFilter, floor: u8) -> impl Iterator<Item = IvTriple> + Clone {
    admitted_axis(filter.attack, floor).flat_map(move |attack| {
        admitted_axis(filter.defense, floor).flat_map(move |defense| {
            admitted_axis(filter.stamina, floor)
                .map(move |stamina| IvTriple { attack, defense, stamina })
        })
    })
}

/// 枚举所有与观测一致的IV组合（未排序，保持枚举序）。
///
/// 搜索域：星尘解析出的等级区间（有获取来源时再与来源窗口求交）
/// ×三轴各自通过过滤的IV值。观测的CP/HP/星尘缺失（零值）或
/// 基础三围非正时产出空序列，这不是错误。
pub fn enumerate(base: &BaseStats, observation: &Observation) -> Vec<MatchedSpread> {
    if observation.cp == 0 || observation.hp == 0 || observation.stardust == 0 {
        return Vec::new();
    }
    if base.attack == 0 || base.defense == 0 || base.stamina == 0 {
        return Vec::new();
    }

    let (mut level_min, mut level_max) =
        stardust::resolve_level_range(observation.stardust, observation.recent_band_only);

    let mut iv_floor = 0u8;
    if let Some(source) = observation.source {
        let constraints = source.constraints();
        level_min = level_min.max(constraints.level_min);
        level_max = level_max.min(constraints.level_max);
        iv_floor = constraints.iv_floor;
    }

    let filter = observation.appraisal;
    let (cp, hp) = (observation.cp, observation.hp);

    cpm::half_levels(level_min, level_max)
        .flat_map(|level| candidate_ivs(filter, iv_floor).map(move |ivs| (level, ivs)))
        .filter_map(|(level, ivs)| {
            let stats = model::evaluate(base, ivs, level)?;
            (stats.cp == cp && stats.hp == hp).then(|| MatchedSpread::new(level, ivs))
        })
        .collect()
}

/// 对幸存组合施加全序：品质百分比降序 → 等级升序 → 总和降序。
///
/// 等级更低视为更强先验（同样品质下成长空间更大）。
/// 稳定排序，键完全相等时保持枚举序。
pub fn rank(spreads: &mut [MatchedSpread]) {
    spreads.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.level.partial_cmp(&b.level).unwrap_or(Ordering::Equal))
            .then_with(|| b.total.cmp(&a.total))
    });
}

/// 高层入口：枚举并排序。
pub fn enumerate_and_rank(base: &BaseStats, observation: &Observation) -> Vec<MatchedSpread> {
    let mut spreads = enumerate(base, observation);
    rank(&mut spreads);
    debug!(
        "IV搜索完成: cp={} hp={} 星尘={} 命中{}组",
        observation.cp,
        observation.hp,
        observation.stardust,
        spreads.len()
    );
    spreads
}
