//! Comprehensive report: every calculation for one person in one value.

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::abracadabra::{AbracadabraTriangle, abracadabra};
use crate::date::{CalendarDate, DateParsing, parse_birth_date_with};
use crate::error::AnkError;
use crate::fractal::BehaviorFractal;
use crate::individual::IndividualNumbers;
use crate::life_cycle::LifeCycleTable;
use crate::personal::PersonalNumbers;
use crate::square::PythagoreanSquare;
use crate::task::TaskNumbers;

/// Inputs for [`build_report`].
#[derive(Debug, Clone, Default)]
pub struct ReportRequest<'a> {
    pub birth_date: &'a str,
    pub name: Option<&'a str>,
    pub surname: Option<&'a str>,
    /// Reference date for individual numbers.
    pub target: Option<NaiveDate>,
    pub parsing: DateParsing,
}

/// All derived values for one birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub birth_date: CalendarDate,
    pub personal: PersonalNumbers,
    pub fractal: BehaviorFractal,
    pub tasks: Option<TaskNumbers>,
    pub life_cycle: LifeCycleTable,
    pub individual: IndividualNumbers,
    pub square: PythagoreanSquare,
    /// `None` when no name was given or it has fewer than nine Latin letters.
    pub abracadabra: Option<AbracadabraTriangle>,
}

/// Build a report. Only birth-date errors fail the whole report.
pub fn build_report(req: &ReportRequest<'_>) -> Result<Report, AnkError> {
    let birth = parse_birth_date_with(req.birth_date, req.parsing)?;

    let full_name = match (req.name, req.surname) {
        (Some(n), Some(s)) => Some(format!("{n} {s}")),
        (Some(n), None) => Some(n.to_string()),
        (None, Some(s)) => Some(s.to_string()),
        (None, None) => None,
    };
    let personal = PersonalNumbers::from_date(birth, full_name.as_deref());

    let target = req
        .target
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let abracadabra = if full_name.is_some() {
        abracadabra(req.name.unwrap_or(""), req.surname.unwrap_or(""))
            .inspect_err(|e| debug!("report: abracadabra skipped: {e}"))
            .ok()
    } else {
        None
    };

    Ok(Report {
        birth_date: birth,
        personal,
        fractal: BehaviorFractal::from_date(birth),
        tasks: personal.task_numbers(),
        life_cycle: LifeCycleTable::from_date(birth),
        individual: IndividualNumbers::compute(
            birth,
            target.into(),
            Some(i64::from(personal.destiny)),
        ),
        square: PythagoreanSquare::from_date(birth),
        abracadabra,
    })
}
