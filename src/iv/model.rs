// 属性/等级模型模块
// 开发心理：CP和HP的闭式公式是推断的神谕，截断顺序和下限必须逐位复现
// 设计原则：纯函数，全部用f64算完再做一次floor，CP保底10

use serde::{Deserialize, Serialize};

use crate::iv::cpm;

/// 种族基础三围。按种族/形态固定，均为正整数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u16,
    pub defense: u16,
    pub stamina: u16,
}

/// 一组隐藏个体值，每轴0..=15。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvTriple {
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

impl IvTriple {
    pub fn total(self) -> u8 {
        self.attack + self.defense + self.stamina
    }
}

/// 模型输出：可观测的战斗力和体力。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub cp: u32,
    pub hp: u32,
}

/// 由基础三围、个体值和等级计算(CP, HP)。
///
/// 仅当乘数查表失败时返回`None`。公式：
/// - hp = floor(有效耐力 × m)
/// - cp = max(10, floor(有效攻击 × sqrt(有效防御) × sqrt(有效耐力) × m² / 10))
///
/// 全程f64，每个输出只在最后floor一次。
pub fn evaluate(base: &BaseStats, ivs: IvTriple, level: f64) -> Option<CombatStats> {
    let m = cpm::multiplier_at(level)?;

    let attack = (base.attack as u32 + ivs.attack as u32) as f64;
    let defense = (base.defense as u32 + ivs.defense as u32) as f64;
    let stamina = (base.stamina as u32 + ivs.stamina as u32) as f64;

    let hp = (stamina * m).floor() as u32;
    let cp = (attack * defense.sqrt() * stamina.sqrt() * m * m / 10.0).floor() as u32;

    Some(CombatStats { cp: cp.max(10), hp })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: BaseStats = BaseStats { attack: 118, defense: 111, stamina: 128 };
    const DRAGONITE: BaseStats = BaseStats { attack: 263, defense: 198, stamina: 209 };

    #[test]
    fn test_known_value_level_one() {
        // 妙蛙种子0/0/0 @ 1.0：hp = floor(128*0.094) = 12，cp = floor(12.43) = 12
        let stats = evaluate(&BULBASAUR, IvTriple { attack: 0, defense: 0, stamina: 0 }, 1.0).unwrap();
        assert_eq!(stats.hp, 12);
        assert_eq!(stats.cp, 12);
    }

    #[test]
    fn test_known_value_dragonite_max() {
        // 快龙15/15/15 @ 50.0是公开的满级满个体参考值
        let stats =
            evaluate(&DRAGONITE, IvTriple { attack: 15, defense: 15, stamina: 15 }, 50.0).unwrap();
        assert_eq!(stats.cp, 4287);
        assert_eq!(stats.hp, 188);
    }

    #[test]
    fn test_cp_floor_of_ten() {
        // 极小三围在低等级算出的原始CP不足10，被托底到10
        let tiny = BaseStats { attack: 1, defense: 1, stamina: 1 };
        let stats = evaluate(&tiny, IvTriple { attack: 0, defense: 0, stamina: 0 }, 1.0).unwrap();
        assert_eq!(stats.cp, 10);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let ivs = IvTriple { attack: 0, defense: 0, stamina: 0 };
        assert_eq!(evaluate(&BULBASAUR, ivs, 60.0), None);
        assert_eq!(evaluate(&BULBASAUR, ivs, 0.0), None);
    }

    #[test]
    fn test_monotonic_in_each_iv_axis() {
        let level = 20.0;
        let mut previous = evaluate(&DRAGONITE, IvTriple { attack: 0, defense: 7, stamina: 7 }, level).unwrap();
        for attack in 1..=15u8 {
            let next = evaluate(&DRAGONITE, IvTriple { attack, defense: 7, stamina: 7 }, level).unwrap();
            assert!(next.cp >= previous.cp && next.hp >= previous.hp);
            previous = next;
        }

        let mut previous = evaluate(&DRAGONITE, IvTriple { attack: 7, defense: 0, stamina: 7 }, level).unwrap();
        for defense in 1..=15u8 {
            let next = evaluate(&DRAGONITE, IvTriple { attack: 7, defense, stamina: 7 }, level).unwrap();
            assert!(next.cp >= previous.cp && next.hp >= previous.hp);
            previous = next;
        }

        let mut previous = evaluate(&DRAGONITE, IvTriple { attack: 7, defense: 7, stamina: 0 }, level).unwrap();
        for stamina in 1..=15u8 {
            let next = evaluate(&DRAGONITE, IvTriple { attack: 7, defense: 7, stamina }, level).unwrap();
            assert!(next.cp >= previous.cp && next.hp >= previous.hp);
            previous = next;
        }
    }

    #[test]
    fn test_monotonic_in_level() {
        let ivs = IvTriple { attack: 8, defense: 8, stamina: 8 };
        let mut previous = evaluate(&DRAGONITE, ivs, 1.0).unwrap();
        for doubled in 3..=100u32 {
            let level = doubled as f64 / 2.0;
            let next = evaluate(&DRAGONITE, ivs, level).unwrap();
            assert!(next.cp >= previous.cp && next.hp >= previous.hp, "等级{}处不单调", level);
            previous = next;
        }
    }

    #[test]
    fn test_iv_total() {
        assert_eq!(IvTriple { attack: 15, defense: 15, stamina: 15 }.total(), 45);
        assert_eq!(IvTriple { attack: 0, defense: 0, stamina: 0 }.total(), 0);
    }
}
