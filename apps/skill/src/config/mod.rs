pub mod skill;

pub use skill::SkillConfig;
