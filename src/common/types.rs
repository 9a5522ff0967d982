/// A Unicode scalar value as written in UnicodeData.txt. Range is not checked.
pub type CodePoint = u32;

/// Process exit status of the generator.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GeneratorStatus {
    Ok = 0,
    InputNotFound = 1,
    MalformedRecord = 2,
    OutputWriteFailure = 3,
    RenderFailure = 4,
    InvalidConfig = 5,
}

impl GeneratorStatus {
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CaseMapping {
    pub from: CodePoint,
    pub to: CodePoint,
}

/// A hex field with the spelling it had in the source file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HexField {
    pub value: CodePoint,
    pub text: String,
}

/// The fields of one UnicodeData.txt line that case mapping cares about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnicodeRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub code_point: HexField,
    pub simple_uppercase: Option<HexField>,
    pub simple_lowercase: Option<HexField>,
}

impl UnicodeRecord {
    pub fn uppercase_mapping(&self) -> Option<(&HexField, &HexField)> {
        self.simple_uppercase.as_ref().map(|to| (&self.code_point, to))
    }

    pub fn lowercase_mapping(&self) -> Option<(&HexField, &HexField)> {
        self.simple_lowercase.as_ref().map(|to| (&self.code_point, to))
    }
}
