use thiserror::Error;

const DEFAULT_SECTION: &str = "DEFAULT";
const BOM: char = '\u{feff}';

type Entries = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct IniError {
    pub line: usize,
    pub kind: IniErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniErrorKind {
    #[error("key/value pair before any section header")]
    MissingSectionHeader,
    #[error("invalid section header")]
    InvalidHeader,
    #[error("expected `key = value` or `key: value`")]
    MissingDelimiter,
}

/// A parsed INI document. Section order and key order follow the source text.
/// A repeated section header reopens the earlier section, and a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    defaults: Entries,
    sections: Vec<(String, Entries)>,
}

/// Read-only view of one section, with `[DEFAULT]` keys as fallback.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    name: &'a str,
    entries: &'a [(String, String)],
    defaults: &'a [(String, String)],
}

impl<'a> Section<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Keys are matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        let key = key.to_lowercase();
        lookup(self.entries, &key).or_else(|| lookup(self.defaults, &key))
    }
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Defaults,
    Section(usize),
}

impl IniDocument {
    pub fn parse(input: &str) -> Result<Self, IniError> {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        let mut document = Self::default();
        let mut target: Option<Target> = None;
        // entry index and indent width of the last key line
        let mut last_key: Option<(usize, usize)> = None;

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                last_key = None;
                continue;
            }
            if trimmed.starts_with(['#', ';']) {
                continue;
            }

            let indent = line.len() - line.trim_start().len();
            if let (Some(current), Some((entry, key_indent))) = (target, last_key) {
                if indent > key_indent {
                    let value = &mut document.entries_mut(current)[entry].1;
                    value.push('\n');
                    value.push_str(trimmed);
                    continue;
                }
            }

            if trimmed.starts_with('[') {
                let name = parse_header(trimmed, line_number)?;
                target = Some(document.open_section(name));
                last_key = None;
                continue;
            }

            let current = target.ok_or(IniError {
                line: line_number,
                kind: IniErrorKind::MissingSectionHeader,
            })?;
            let (key, value) = parse_entry(trimmed, line_number)?;
            let entries = document.entries_mut(current);
            let entry = match entries.iter().position(|(existing, _)| *existing == key) {
                Some(position) => {
                    entries[position].1 = value;
                    position
                }
                None => {
                    entries.push((key, value));
                    entries.len() - 1
                }
            };
            last_key = Some((entry, indent));
        }

        Ok(document)
    }

    /// Sections in file order, excluding `[DEFAULT]`.
    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.sections.iter().map(|(name, entries)| Section {
            name,
            entries,
            defaults: &self.defaults,
        })
    }

    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        self.sections().find(|section| section.name() == name)
    }

    fn open_section(&mut self, name: &str) -> Target {
        if name == DEFAULT_SECTION {
            return Target::Defaults;
        }

        let index = match self.sections.iter().position(|(existing, _)| existing == name) {
            Some(index) => index,
            None => {
                self.sections.push((name.to_string(), Entries::new()));
                self.sections.len() - 1
            }
        };
        Target::Section(index)
    }

    fn entries_mut(&mut self, target: Target) -> &mut Entries {
        match target {
            Target::Defaults => &mut self.defaults,
            Target::Section(index) => &mut self.sections[index].1,
        }
    }
}

fn lookup<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, value)| value.as_str())
}

/// The header runs to the last `]` on the line.
fn parse_header(trimmed: &str, line: usize) -> Result<&str, IniError> {
    match trimmed.rfind(']') {
        Some(close) if close > 1 => Ok(&trimmed[1..close]),
        _ => Err(IniError {
            line,
            kind: IniErrorKind::InvalidHeader,
        }),
    }
}

fn parse_entry(trimmed: &str, line: usize) -> Result<(String, String), IniError> {
    let split = trimmed
        .find(['=', ':'])
        .filter(|split| !trimmed[..*split].trim().is_empty())
        .ok_or(IniError {
            line,
            kind: IniErrorKind::MissingDelimiter,
        })?;

    let key = trimmed[..split].trim().to_lowercase();
    let value = trimmed[split + 1..].trim().to_string();
    Ok((key, value))
}
