use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The two orders of Roman society a person can be born into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SocialOrder {
    Patrician,
    Plebeian,
}

string_enum!(SocialOrder {
    Patrician => "patrician",
    Plebeian => "plebeian",
});

/// Which social order may stand for an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ClassRequirement {
    Patrician,
    Plebeian,
    Both,
}

string_enum!(ClassRequirement {
    Patrician => "patrician",
    Plebeian => "plebeian",
    Both => "both",
});

impl ClassRequirement {
    pub fn admits(self, order: SocialOrder) -> bool {
        match self {
            ClassRequirement::Both => true,
            ClassRequirement::Patrician => order == SocialOrder::Patrician,
            ClassRequirement::Plebeian => order == SocialOrder::Plebeian,
        }
    }
}

/// Every public post on the ladder. Per-kind parameters live in
/// [`OfficeCatalog`], not on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Magistracy {
    MilitaryTribune,
    Quaestor,
    TribuneOfThePlebs,
    Aedile,
    CuruleAedile,
    Praetor,
    ProPraetor,
    Consul,
    ProConsul,
    Censor,
}

string_enum!(Magistracy {
    MilitaryTribune => "military_tribune",
    Quaestor => "quaestor",
    TribuneOfThePlebs => "tribune_of_the_plebs",
    Aedile => "aedile",
    CuruleAedile => "curule_aedile",
    Praetor => "praetor",
    ProPraetor => "pro_praetor",
    Consul => "consul",
    ProConsul => "pro_consul",
    Censor => "censor",
});

impl Magistracy {
    /// Plural title used in roster announcements.
    pub fn plural(self) -> &'static str {
        match self {
            Magistracy::MilitaryTribune => "military tribunes",
            Magistracy::Quaestor => "quaestors",
            Magistracy::TribuneOfThePlebs => "tribunes of the plebs",
            Magistracy::Aedile => "aediles",
            Magistracy::CuruleAedile => "curule aediles",
            Magistracy::Praetor => "praetors",
            Magistracy::ProPraetor => "propraetors",
            Magistracy::Consul => "consuls",
            Magistracy::ProConsul => "proconsuls",
            Magistracy::Censor => "censors",
        }
    }
}

/// Configuration of a single office kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagistracySpec {
    pub kind: Magistracy,
    pub rank: u8,
    /// Simultaneous holders. Zero means appointed only, never elected.
    pub cohort_size: usize,
    pub usual_age: u32,
    pub class_requirement: ClassRequirement,
    /// Contested only in years divisible by this.
    pub year_frequency: u32,
}

impl MagistracySpec {
    pub const fn new(
        kind: Magistracy,
        rank: u8,
        cohort_size: usize,
        usual_age: u32,
        class_requirement: ClassRequirement,
        year_frequency: u32,
    ) -> Self {
        Self {
            kind,
            rank,
            cohort_size,
            usual_age,
            class_requirement,
            year_frequency,
        }
    }

    pub fn contested_in(&self, year: u32) -> bool {
        self.year_frequency != 0 && year.is_multiple_of(self.year_frequency)
    }

    pub fn is_elected(&self) -> bool {
        self.cohort_size > 0
    }
}

/// The ordered ladder of offices, the resume table, and the offices that play
/// a special role in shocks and the census.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeCatalog {
    pub offices: Vec<MagistracySpec>,
    /// Offices a candidate must already have held, keyed by the office sought.
    pub resume: BTreeMap<Magistracy, Vec<Magistracy>>,
    /// Open to every age- and order-eligible candidate without a resume check.
    pub entry_level: Magistracy,
    /// Bears the full weight of the yearly shock.
    pub head_magistracy: Magistracy,
    /// A sitting holder triggers Senate induction.
    pub census_office: Magistracy,
    /// Having held it once qualifies for the Senate.
    pub qualifying_office: Magistracy,
}

impl OfficeCatalog {
    pub fn spec(&self, kind: Magistracy) -> Option<&MagistracySpec> {
        self.offices.iter().find(|s| s.kind == kind)
    }

    pub fn spec_mut(&mut self, kind: Magistracy) -> Option<&mut MagistracySpec> {
        self.offices.iter_mut().find(|s| s.kind == kind)
    }

    pub fn requirements(&self, kind: Magistracy) -> Option<&[Magistracy]> {
        self.resume.get(&kind).map(Vec::as_slice)
    }

    /// Whether a career history satisfies the resume filter for `kind`.
    ///
    /// The entry-level office accepts everyone. Any other office must have a
    /// resume entry, and an office without one admits nobody.
    pub fn resume_satisfied(&self, kind: Magistracy, history: &[Magistracy]) -> bool {
        if kind == self.entry_level {
            return true;
        }
        match self.requirements(kind) {
            Some(reqs) => reqs.iter().all(|r| history.contains(r)),
            None => false,
        }
    }

    /// Elected offices, senior first. Used for roster announcements.
    pub fn elected_by_seniority(&self) -> impl Iterator<Item = &MagistracySpec> {
        self.offices.iter().rev().filter(|s| s.is_elected())
    }
}

impl Default for OfficeCatalog {
    fn default() -> Self {
        use ClassRequirement::{Both, Patrician, Plebeian};
        use Magistracy::*;

        let offices = vec![
            MagistracySpec::new(MilitaryTribune, 1, 36, 26, Both, 1),
            MagistracySpec::new(Quaestor, 2, 8, 30, Both, 1),
            MagistracySpec::new(TribuneOfThePlebs, 3, 4, 30, Plebeian, 1),
            MagistracySpec::new(Aedile, 4, 2, 36, Plebeian, 1),
            MagistracySpec::new(CuruleAedile, 4, 2, 36, Patrician, 1),
            MagistracySpec::new(Praetor, 5, 4, 39, Both, 1),
            MagistracySpec::new(ProPraetor, 5, 0, 40, Both, 1),
            MagistracySpec::new(Consul, 6, 2, 42, Both, 1),
            MagistracySpec::new(ProConsul, 6, 0, 43, Both, 1),
            MagistracySpec::new(Censor, 7, 2, 43, Patrician, 5),
        ];

        let junior = vec![MilitaryTribune, Quaestor];
        let praetorian = vec![MilitaryTribune, Quaestor, Praetor];
        let consular = vec![MilitaryTribune, Quaestor, Praetor, Consul];
        let resume = BTreeMap::from([
            (Quaestor, vec![MilitaryTribune]),
            (TribuneOfThePlebs, junior.clone()),
            (Aedile, junior.clone()),
            (CuruleAedile, junior.clone()),
            (Praetor, junior),
            (ProPraetor, praetorian.clone()),
            (Consul, praetorian),
            (ProConsul, consular.clone()),
            (Censor, consular),
        ]);

        Self {
            offices,
            resume,
            entry_level: MilitaryTribune,
            head_magistracy: Consul,
            census_office: Censor,
            qualifying_office: Quaestor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_ordered_by_rank() {
        let catalog = OfficeCatalog::default();
        let ranks: Vec<u8> = catalog.offices.iter().map(|s| s.rank).collect();
        for window in ranks.windows(2) {
            assert!(window[0] <= window[1], "ranks out of order: {ranks:?}");
        }
        assert_eq!(catalog.offices.first().unwrap().kind, Magistracy::MilitaryTribune);
        assert_eq!(catalog.offices.last().unwrap().kind, Magistracy::Censor);
    }

    #[test]
    fn every_office_but_entry_level_has_resume_entry() {
        let catalog = OfficeCatalog::default();
        for spec in &catalog.offices {
            if spec.kind == catalog.entry_level {
                assert!(catalog.requirements(spec.kind).is_none());
            } else {
                assert!(
                    catalog.requirements(spec.kind).is_some(),
                    "{} has no resume entry",
                    spec.kind
                );
            }
        }
    }

    #[test]
    fn class_requirement_admits() {
        assert!(ClassRequirement::Both.admits(SocialOrder::Patrician));
        assert!(ClassRequirement::Both.admits(SocialOrder::Plebeian));
        assert!(ClassRequirement::Patrician.admits(SocialOrder::Patrician));
        assert!(!ClassRequirement::Patrician.admits(SocialOrder::Plebeian));
        assert!(ClassRequirement::Plebeian.admits(SocialOrder::Plebeian));
        assert!(!ClassRequirement::Plebeian.admits(SocialOrder::Patrician));
    }

    #[test]
    fn censor_contested_every_fifth_year() {
        let catalog = OfficeCatalog::default();
        let censor = catalog.spec(Magistracy::Censor).unwrap();
        let years: Vec<u32> = (1..=20).filter(|&y| censor.contested_in(y)).collect();
        assert_eq!(years, vec![5, 10, 15, 20]);

        let consul = catalog.spec(Magistracy::Consul).unwrap();
        assert!((1..=20).all(|y| consul.contested_in(y)));
    }

    #[test]
    fn resume_filter_rules() {
        use Magistracy::*;
        let catalog = OfficeCatalog::default();

        assert!(catalog.resume_satisfied(MilitaryTribune, &[]));
        assert!(!catalog.resume_satisfied(Quaestor, &[]));
        assert!(catalog.resume_satisfied(Quaestor, &[MilitaryTribune]));
        assert!(!catalog.resume_satisfied(Consul, &[MilitaryTribune, Quaestor]));
        assert!(catalog.resume_satisfied(
            Consul,
            &[MilitaryTribune, MilitaryTribune, Quaestor, Praetor]
        ));
    }

    #[test]
    fn office_without_resume_entry_fails_closed() {
        let mut catalog = OfficeCatalog::default();
        catalog.resume.remove(&Magistracy::Praetor);
        let seasoned = [
            Magistracy::MilitaryTribune,
            Magistracy::Quaestor,
            Magistracy::Aedile,
        ];
        assert!(!catalog.resume_satisfied(Magistracy::Praetor, &seasoned));
    }

    #[test]
    fn catalog_serializes_offices_by_name() {
        let catalog = OfficeCatalog::default();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["entry_level"], "military_tribune");
        assert_eq!(json["offices"][9]["class_requirement"], "patrician");
        assert_eq!(json["resume"]["quaestor"][0], "military_tribune");

        let back: OfficeCatalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn elected_by_seniority_skips_appointed_posts() {
        let catalog = OfficeCatalog::default();
        let kinds: Vec<Magistracy> = catalog.elected_by_seniority().map(|s| s.kind).collect();
        assert_eq!(kinds.first(), Some(&Magistracy::Censor));
        assert_eq!(kinds.last(), Some(&Magistracy::MilitaryTribune));
        assert!(!kinds.contains(&Magistracy::ProConsul));
        assert!(!kinds.contains(&Magistracy::ProPraetor));
    }
}
