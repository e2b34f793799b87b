// 宝可梦种族数据模块
// 开发心理：推断只依赖种族的攻击/防御/耐力基础值，按精确身份解析
// 设计原则：数据驱动、可扩展；样例数据先覆盖常用种族，可按需扩充

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::iv::model::BaseStats;

pub type SpeciesId = u32;

/// 一个种族/形态：图鉴编号、名称和基础三围。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub base: BaseStats,
}

// 全局种族数据库
lazy_static! {
    static ref SPECIES_DATABASE: HashMap<SpeciesId, Species> = {
        let mut db = HashMap::new();
        add_species(&mut db);
        debug!("种族数据库初始化完成，共加载了{}个种族", db.len());
        db
    };
}

fn insert(
    db: &mut HashMap<SpeciesId, Species>,
    id: SpeciesId,
    name: &str,
    attack: u16,
    defense: u16,
    stamina: u16,
) {
    db.insert(
        id,
        Species { id, name: name.to_string(), base: BaseStats { attack, defense, stamina } },
    );
}

fn add_species(db: &mut HashMap<SpeciesId, Species>) {
    insert(db, 1, "Bulbasaur", 118, 111, 128);
    insert(db, 2, "Ivysaur", 151, 143, 155);
    insert(db, 3, "Venusaur", 198, 189, 190);
    insert(db, 25, "Pikachu", 112, 96, 111);
    insert(db, 130, "Gyarados", 237, 186, 216);
    insert(db, 131, "Lapras", 165, 174, 277);
    insert(db, 133, "Eevee", 104, 114, 146);
    insert(db, 134, "Vaporeon", 205, 161, 277);
    insert(db, 143, "Snorlax", 190, 169, 330);
    insert(db, 149, "Dragonite", 263, 198, 209);
    insert(db, 150, "Mewtwo", 300, 182, 214);
    insert(db, 248, "Tyranitar", 251, 207, 225);
}

/// 按图鉴编号获取种族。
pub fn get(id: SpeciesId) -> Option<&'static Species> {
    SPECIES_DATABASE.get(&id)
}

/// 按名称精确解析（忽略大小写和首尾空白）。
pub fn find_by_name(name: &str) -> Option<&'static Species> {
    let name = name.trim();
    SPECIES_DATABASE.values().find(|species| species.name.eq_ignore_ascii_case(name))
}

/// 全部种族。
pub fn all() -> &'static HashMap<SpeciesId, Species> {
    &SPECIES_DATABASE
}

impl Species {
    pub fn get(id: SpeciesId) -> Option<&'static Self> {
        get(id)
    }

    pub fn find_by_name(name: &str) -> Option<&'static Self> {
        find_by_name(name)
    }
}
