//! Gender role switching.

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Gender {
    #[name = "male"]
    Male,
    #[name = "female"]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Self::Male, Self::Female];

    pub fn role_name(&self) -> &'static str {
        match self {
            Self::Male => "♂",
            Self::Female => "♀",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

/// Role changes needed to give a member a gender role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderChange {
    pub add: Option<Gender>,
    pub remove: Option<Gender>,
}

impl GenderChange {
    pub fn is_noop(&self) -> bool {
        self.add.is_none() && self.remove.is_none()
    }
}

/// Plans the switch to `target` given which gender roles the member holds.
pub fn plan_gender_change(target: Gender, held: &[Gender]) -> GenderChange {
    let opposite = target.opposite();

    GenderChange {
        add: (!held.contains(&target)).then_some(target),
        remove: held.contains(&opposite).then_some(opposite),
    }
}
