use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use super::model::{Car, CarsDataset};

/// The vehicle table compiled into the binary.
const BUILTIN_CSV: &str = include_str!("../../assets/mtcars.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the built-in vehicle table.
pub fn load_builtin() -> Result<CarsDataset> {
    parse_csv(BUILTIN_CSV).context("parsing built-in vehicle table")
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row `model,mpg,cyl,disp,hp,drat,wt,qsec,vs,am,gear,carb`,
/// one vehicle per row. `model` must be unique and every other column numeric.
pub fn parse_csv(text: &str) -> Result<CarsDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut cars = Vec::new();

    for (row_no, result) in reader.deserialize::<Car>().enumerate() {
        let car = result.with_context(|| format!("CSV row {row_no}"))?;

        if !seen.insert(car.model.clone()) {
            bail!("CSV row {row_no}: duplicate model name '{}'", car.model);
        }

        cars.push(car);
    }

    if cars.is_empty() {
        bail!("table has no rows");
    }

    Ok(CarsDataset::from_cars(cars))
}
