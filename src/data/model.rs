use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Field – a numeric column of the table
// ---------------------------------------------------------------------------

/// The numeric columns of the vehicle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Mpg,
    Cyl,
    Disp,
    Hp,
    Drat,
    Wt,
    Qsec,
    Vs,
    Am,
    Gear,
    Carb,
}

impl Field {
    /// Column name as it appears in the CSV header.
    pub fn column(self) -> &'static str {
        match self {
            Field::Mpg => "mpg",
            Field::Cyl => "cyl",
            Field::Disp => "disp",
            Field::Hp => "hp",
            Field::Drat => "drat",
            Field::Wt => "wt",
            Field::Qsec => "qsec",
            Field::Vs => "vs",
            Field::Am => "am",
            Field::Gear => "gear",
            Field::Carb => "carb",
        }
    }

    /// Human readable axis title.
    pub fn label(self) -> &'static str {
        match self {
            Field::Mpg => "Miles per gallon",
            Field::Cyl => "Number of cylinders",
            Field::Disp => "Displacement (cu.in.)",
            Field::Hp => "Gross horsepower",
            Field::Drat => "Rear axle ratio",
            Field::Wt => "Weight (1000 lbs)",
            Field::Qsec => "1/4 mile time (s)",
            Field::Vs => "Engine (0 = V-shaped, 1 = straight)",
            Field::Am => "Transmission (0 = automatic, 1 = manual)",
            Field::Gear => "Number of forward gears",
            Field::Carb => "Number of carburetors",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Car – one row of the table
// ---------------------------------------------------------------------------

/// A single vehicle (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Car {
    /// Unique model name, the row identifier.
    pub model: String,
    pub mpg: f64,
    pub cyl: f64,
    pub disp: f64,
    pub hp: f64,
    pub drat: f64,
    pub wt: f64,
    pub qsec: f64,
    pub vs: f64,
    pub am: f64,
    pub gear: f64,
    pub carb: f64,
}

impl Car {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Mpg => self.mpg,
            Field::Cyl => self.cyl,
            Field::Disp => self.disp,
            Field::Hp => self.hp,
            Field::Drat => self.drat,
            Field::Wt => self.wt,
            Field::Qsec => self.qsec,
            Field::Vs => self.vs,
            Field::Am => self.am,
            Field::Gear => self.gear,
            Field::Carb => self.carb,
        }
    }
}

// ---------------------------------------------------------------------------
// CarsDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The observation table. Row order is the order of the source.
#[derive(Debug, Clone)]
pub struct CarsDataset {
    pub cars: Vec<Car>,
}

impl CarsDataset {
    pub fn from_cars(cars: Vec<Car>) -> Self {
        CarsDataset { cars }
    }

    /// All values of one column, in row order.
    pub fn column(&self, field: Field) -> Vec<f64> {
        self.cars.iter().map(|car| car.value(field)).collect()
    }

    /// Row identifiers, in row order.
    pub fn names(&self) -> Vec<String> {
        self.cars.iter().map(|car| car.model.clone()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
