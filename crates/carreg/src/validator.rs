use crate::config::ValidatorConfig;

use carreg_core::{err, CarPatch, Error, Result};
use chrono::Datelike;
use regex::Regex;

/// The earliest model year accepted.
const MIN_YEAR: u16 = 1900;

/// Checks patch fields against the configured patterns.
///
/// Patterns are compiled once, when the validator is built.
#[derive(Debug, Clone)]
pub struct Validator {
    reg_num: Regex,
    mark: Regex,
    model: Regex,
    owner_name: Regex,
    owner_surname: Regex,
    owner_patronymic: Regex,
}

impl Validator {
    pub fn new(config: &ValidatorConfig) -> Result<Validator> {
        Ok(Validator {
            reg_num: compile("reg_num", &config.reg_num)?,
            mark: compile("mark", &config.mark)?,
            model: compile("model", &config.model)?,
            owner_name: compile("owner_name", &config.owner_name)?,
            owner_surname: compile("owner_surname", &config.owner_surname)?,
            owner_patronymic: compile("owner_patronymic", &config.owner_patronymic)?,
        })
    }

    /// Validates every field present in `patch`. Absent fields are not
    /// checked.
    pub fn validate_patch(&self, patch: &CarPatch) -> Result<()> {
        self.validate_patch_at(patch, current_year())
    }

    /// Like [`Validator::validate_patch`], with the upper year bound given.
    pub fn validate_patch_at(&self, patch: &CarPatch, current_year: u16) -> Result<()> {
        check(&self.reg_num, "regNum", patch.reg_num.as_ref())?;
        check(&self.mark, "mark", patch.mark.as_ref())?;
        check(&self.model, "model", patch.model.as_ref())?;

        if let Some(year) = patch.year {
            if !(MIN_YEAR..=current_year).contains(&year) {
                return Err(Error::validation(
                    "year",
                    format!("must be between {MIN_YEAR} and {current_year}"),
                ));
            }
        }

        check(&self.owner_name, "owner.name", patch.owner_name())?;
        check(&self.owner_surname, "owner.surname", patch.owner_surname())?;
        check(
            &self.owner_patronymic,
            "owner.patronymic",
            patch.owner_patronymic(),
        )?;

        Ok(())
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::from(anyhow::Error::from(e)).context(err!("invalid `validator.{field}` pattern"))
    })
}

fn check(regex: &Regex, field: &'static str, value: Option<&String>) -> Result<()> {
    match value {
        Some(value) if !regex.is_match(value) => Err(Error::validation(
            field,
            format!("`{value}` does not match `{}`", regex.as_str()),
        )),
        _ => Ok(()),
    }
}

fn current_year() -> u16 {
    u16::try_from(chrono::Local::now().year()).unwrap_or(u16::MAX)
}
