/// Reading the medical-charges CSV into typed [`Record`]s.
///
/// The expected header is `age,sex,bmi,children,smoker,region,charges` (any column order,
/// extra columns ignored). Every numeric cell is parsed explicitly; a cell that is not a
/// finite number fails the whole load with [`LoadError::InvalidField`] instead of turning
/// into a silent `NaN`.
///
/// ### Example
/// ```no_run
/// # use medcharges::loader::{DataSource, load_records};
/// # use medcharges::config::SmokerPolicy;
/// let source = DataSource::parse("medical-charges.csv");
/// let records = load_records(&source, SmokerPolicy::Keep)?;
/// println!("{} rows", records.len());
/// # Ok::<(), medcharges::error::LoadError>(())
/// ```
use crate::config::SmokerPolicy;
use crate::error::LoadError;
use crate::models::{Record, Smoker};
use csv::{ReaderBuilder, StringRecord, Trim};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// Where the CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` prefixes select a URL, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(t.to_string())
        } else {
            DataSource::Path(PathBuf::from(t))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => f.write_str(u),
        }
    }
}

const COLUMNS: [&str; 7] = ["age", "sex", "bmi", "children", "smoker", "region", "charges"];

/// Column positions resolved from the header row, in `COLUMNS` order.
struct ColumnMap([usize; 7]);

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let mut idx = [0usize; 7];
        for (slot, name) in idx.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))?;
        }
        Ok(Self(idx))
    }

    fn get<'r>(&self, row: &'r StringRecord, col: usize) -> &'r str {
        row.get(self.0[col]).unwrap_or("")
    }
}

/// Load and parse all records from `source`.
pub fn load_records(source: &DataSource, policy: SmokerPolicy) -> Result<Vec<Record>, LoadError> {
    let records = match source {
        DataSource::Path(path) => {
            let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
                path: path.clone(),
                source: e,
            })?;
            parse_records(file, policy)?
        }
        DataSource::Url(url) => {
            let body = fetch_text(url)?;
            parse_records(body.as_bytes(), policy)?
        }
    };
    log::info!("loaded {} records from {}", records.len(), source);
    Ok(records)
}

/// Single-attempt blocking GET; a non-success status is an error.
fn fetch_text(url: &str) -> Result<String, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(30)) // total request timeout
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .user_agent(concat!("medcharges/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(http_err)?;
    let resp = http.get(url).send().map_err(http_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    resp.text().map_err(http_err)
}

/// Parse records from any CSV reader (header row required).
pub fn parse_records<R: Read>(reader: R, policy: SmokerPolicy) -> Result<Vec<Record>, LoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        out.push(parse_row(&columns, &row, line, policy)?);
    }
    Ok(out)
}

fn parse_row(
    columns: &ColumnMap,
    row: &StringRecord,
    line: u64,
    policy: SmokerPolicy,
) -> Result<Record, LoadError> {
    let number = |col: usize| -> Result<f64, LoadError> {
        let raw = columns.get(row, col);
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(LoadError::InvalidField {
                line,
                column: COLUMNS[col],
                value: raw.to_string(),
            }),
        }
    };

    let children_raw = columns.get(row, 3);
    let children = children_raw
        .parse::<u32>()
        .map_err(|_| LoadError::InvalidField {
            line,
            column: COLUMNS[3],
            value: children_raw.to_string(),
        })?;

    let smoker = Smoker::parse(columns.get(row, 4));
    if let Smoker::Other(value) = &smoker {
        match policy {
            SmokerPolicy::Reject => {
                return Err(LoadError::UnknownSmoker {
                    line,
                    value: value.clone(),
                });
            }
            SmokerPolicy::Keep => {
                log::warn!("line {line}: keeping unknown smoker value {value:?}");
            }
        }
    }

    Ok(Record {
        age: number(0)?,
        sex: columns.get(row, 1).to_string(),
        bmi: number(2)?,
        children,
        smoker,
        region: columns.get(row, 5).to_string(),
        charges: number(6)?,
    })
}
