use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Jour de la semaine (clé de colonne du planning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const WEEK: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Day::Mon),
            "tue" | "tuesday" => Ok(Day::Tue),
            "wed" | "wednesday" => Ok(Day::Wed),
            "thu" | "thursday" => Ok(Day::Thu),
            "fri" | "friday" => Ok(Day::Fri),
            "sat" | "saturday" => Ok(Day::Sat),
            "sun" | "sunday" => Ok(Day::Sun),
            other => Err(format!("unknown day: {other}")),
        }
    }
}

/// Type de créneau (Morning, Evening, Night...). Jeu configurable,
/// d'où une newtype chaîne plutôt qu'un enum fermé.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftKind(String);

impl ShiftKind {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Résultat d'une cellule (employé, jour) : un créneau ou repos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    On(ShiftKind),
    Off,
}

impl Cell {
    pub fn is_off(&self) -> bool {
        matches!(self, Cell::Off)
    }

    pub fn shift(&self) -> Option<&ShiftKind> {
        match self {
            Cell::On(kind) => Some(kind),
            Cell::Off => None,
        }
    }

    /// Libellé affichable ("OFF" pour le repos).
    pub fn label(&self) -> &str {
        match self {
            Cell::On(kind) => kind.as_str(),
            Cell::Off => "OFF",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé du roster. `seniority` est porté par les données mais
/// consommé par aucune règle d'affectation à ce jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub availability: Vec<Day>,
    pub preference: ShiftKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leave_days: Vec<Day>,
    #[serde(default)]
    pub seniority: u8,
}

impl Employee {
    pub fn new<N: Into<String>, R: Into<String>>(
        id: EmployeeId,
        name: N,
        role: R,
        preference: ShiftKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            availability: Vec::new(),
            preference,
            leave_days: Vec::new(),
            seniority: 0,
        }
    }

    pub fn is_available(&self, day: Day) -> bool {
        self.availability.contains(&day)
    }

    pub fn on_leave(&self, day: Day) -> bool {
        self.leave_days.contains(&day)
    }
}

/// Roster complet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn find_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
    pub fn find_mut_by_id(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| &e.id == id)
    }
}

/// Configuration d'une semaine de planning (immuable pendant un run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Jours couverts, dans l'ordre des colonnes du planning.
    pub days: Vec<Day>,
    /// Types de créneaux ouverts, dans l'ordre de tirage.
    pub shifts: Vec<ShiftKind>,
    /// Effectif minimal requis par créneau ; sert aussi de plafond dur
    /// de capacité (au-delà, la cellule dégénère en OFF).
    pub requirements: BTreeMap<ShiftKind, u32>,
    /// Plafond de créneaux travaillés par employé et par semaine.
    pub max_shifts_per_week: u32,
    /// Créneau interdit deux fois de suite (Night par défaut).
    #[serde(default)]
    pub no_repeat: Option<ShiftKind>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let morning = ShiftKind::new("Morning");
        let evening = ShiftKind::new("Evening");
        let night = ShiftKind::new("Night");
        let mut requirements = BTreeMap::new();
        requirements.insert(morning.clone(), 2);
        requirements.insert(evening.clone(), 1);
        requirements.insert(night.clone(), 1);
        Self {
            days: Day::WEEK.to_vec(),
            shifts: vec![morning, evening, night.clone()],
            requirements,
            max_shifts_per_week: 5,
            no_repeat: Some(night),
        }
    }
}

impl ScheduleConfig {
    /// Vérifie la cohérence interne (jours/créneaux non vides, un
    /// minimum d'effectif par créneau ouvert).
    pub fn validate(&self) -> Result<(), String> {
        if self.days.is_empty() {
            return Err("config must cover at least one day".to_string());
        }
        if self.shifts.is_empty() {
            return Err("config must open at least one shift kind".to_string());
        }
        for kind in &self.shifts {
            if !self.requirements.contains_key(kind) {
                return Err(format!("missing staffing requirement for shift {kind}"));
            }
        }
        Ok(())
    }

    pub fn day_index(&self, day: Day) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    pub fn shift_index(&self, kind: &ShiftKind) -> Option<usize> {
        self.shifts.iter().position(|s| s == kind)
    }

    /// Effectif requis pour un créneau (0 si le créneau n'est pas ouvert).
    pub fn requirement(&self, kind: &ShiftKind) -> u32 {
        self.requirements.get(kind).copied().unwrap_or(0)
    }
}

/// Ligne du planning : un employé, une cellule par jour configuré.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub employee: EmployeeId,
    pub name: String,
    pub role: String,
    pub cells: Vec<Cell>,
}

/// Planning hebdomadaire fini. Construit en un seul passage,
/// jamais modifié ensuite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<Day>,
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn row<'a>(&'a self, id: &EmployeeId) -> Option<&'a ScheduleRow> {
        self.rows.iter().find(|r| &r.employee == id)
    }

    pub fn cell<'a>(&'a self, id: &EmployeeId, day: Day) -> Option<&'a Cell> {
        let col = self.days.iter().position(|d| *d == day)?;
        self.row(id)?.cells.get(col)
    }
}
