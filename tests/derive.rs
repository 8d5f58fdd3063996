use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use optbind::{BoxError, Callback, ConvertError, Error, Group, Options};

#[derive(Debug, Default, Options)]
struct Cli {
    /// Show verbose debug information
    #[opt(short = 'v', long)]
    verbose: bool,
    /// Include directories
    #[opt(short = "I", long = "include")]
    include: Vec<String>,
    /// Preprocessor definitions
    #[opt(short = 'D', long = "define")]
    defines: BTreeMap<String, String>,
    #[opt(long, description = "Output file", default = "a.out", optional)]
    output_file: PathBuf,
    #[opt(short = 'j')]
    jobs: Option<u32>,
    #[opt(long, skip)]
    internal: u8,
    not_an_option: String,
}

#[test]
fn scan_in_declaration_order() {
    let mut cli = Cli::default();
    let group = Group::new("Application Options", &mut cli);
    assert!(group.error().is_none());

    let names = group.iter().map(|o| o.to_string()).collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "-v, --verbose",
            "-I, --include",
            "-D, --define",
            "--output-file",
            "-j"
        ]
    );

    let verbose = group.long("verbose").unwrap();
    assert_eq!(verbose.description(), "Show verbose debug information");
    assert_eq!(verbose.field(), "verbose");
    assert!(verbose.is_bool());

    let output = group.long("output-file").unwrap();
    assert_eq!(output.description(), "Output file");
    assert_eq!(output.default(), Some("a.out"));
    assert!(output.optional_argument());

    assert!(group.long("internal").is_none());
    assert!(group.long("not-an-option").is_none());
}

#[test]
fn set_values() {
    let mut cli = Cli::default();
    let mut group = Group::try_new("Application Options", &mut cli).unwrap();

    group.short_mut('v').unwrap().set(Some("")).unwrap();
    for dir in ["a", "b", "c"] {
        group.short_mut('I').unwrap().set(Some(dir)).unwrap();
    }
    let define = group.long_mut("define").unwrap();
    define.set(Some("k=v")).unwrap();
    let err = define.set(Some("novalue")).unwrap_err();
    assert!(matches!(
        err,
        Error::Convert {
            reason: ConvertError::MissingSeparator,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "invalid value \"novalue\" for `-D, --define`: expected `key=value`"
    );
    assert!(std::error::Error::source(&err).is_none());
    group.long_mut("output-file").unwrap().set_or_default(None).unwrap();
    group.short_mut('j').unwrap().set(Some("8")).unwrap();
    drop(group);

    assert!(cli.verbose);
    assert_eq!(cli.include, ["a", "b", "c"]);
    assert_eq!(cli.defines.len(), 1);
    assert_eq!(cli.defines["k"], "v");
    assert_eq!(cli.output_file, PathBuf::from("a.out"));
    assert_eq!(cli.jobs, Some(8));
}

#[test]
fn bool_without_value() {
    let mut cli = Cli::default();
    let mut group = Group::new("", &mut cli);
    let verbose = group.short_mut('v').unwrap();
    assert!(!verbose.requires_argument());
    verbose.set(None).unwrap();
    drop(group);
    assert!(cli.verbose);
}

#[test]
fn failed_conversion_keeps_value() {
    let mut cli = Cli {
        jobs: Some(2),
        ..Cli::default()
    };
    let mut group = Group::new("", &mut cli);
    let jobs = group.short_mut('j').unwrap();
    assert!(jobs.requires_argument());
    match jobs.set(Some("many")).unwrap_err() {
        Error::Convert { option, value, .. } => {
            assert_eq!(option, "-j");
            assert_eq!(value, "many");
        }
        e => panic!("unexpected error: {}", e),
    }
    assert!(jobs.set(None).is_err());
    drop(group);
    assert_eq!(cli.jobs, Some(2));
}

#[derive(Default, Options)]
struct Switches {
    #[opt(short = 'v')]
    verbose: Vec<bool>,
    #[opt(short = "", long = "color")]
    color: Option<bool>,
}

#[test]
fn repeated_switches() {
    let mut s = Switches::default();
    let mut group = Group::try_new("switches", &mut s).unwrap();
    let verbose = group.short_mut('v').unwrap();
    assert!(verbose.is_bool());
    assert!(!verbose.requires_argument());
    for _ in 0..3 {
        verbose.set(None).unwrap();
    }
    let color = group.long_mut("color").unwrap();
    assert!(!color.requires_argument());
    color.set_or_default(None).unwrap();
    drop(group);

    assert_eq!(s.verbose, [true, true, true]);
    assert_eq!(s.color, Some(true));
}

#[test]
fn empty_short_name_is_absent() {
    let mut s = Switches::default();
    let group = Group::new("switches", &mut s);
    assert!(group.error().is_none());
    let color = group.long("color").unwrap();
    assert_eq!(color.short(), None);
    assert_eq!(color.to_string(), "--color");
    assert_eq!(group.len(), 2);
}

#[derive(Default, Options)]
struct Duplicated {
    #[opt(short = 'o', long = "output")]
    output: String,
    #[opt(long = "output")]
    out: String,
}

#[test]
fn duplicate_long_name() {
    let mut d = Duplicated::default();
    let group = Group::new("dup", &mut d);
    match group.error() {
        Some(Error::DuplicateLong {
            long,
            field,
            previous,
        }) => {
            assert_eq!(long, "output");
            assert_eq!(field, "out");
            assert_eq!(previous, "output");
        }
        e => panic!("unexpected result: {:?}", e),
    }
    assert_eq!(group.long("output").unwrap().field(), "output");
    assert!(group.error().unwrap().is_structural());
}

#[derive(Default, Options)]
struct DuplicatedShort {
    #[opt(short = 'n')]
    name: String,
    #[opt(short = 'n', long)]
    number: u32,
}

#[test]
fn duplicate_short_name() {
    let mut d = DuplicatedShort::default();
    let err = Group::try_new("dup", &mut d).unwrap_err();
    assert_eq!(
        err.to_string(),
        "short name `-n` of `number` is already used by `name`"
    );
}

#[derive(Default, Options)]
struct LongShort {
    #[opt(short = "ab")]
    flag: bool,
}

#[test]
fn short_name_too_long() {
    let mut l = LongShort::default();
    let group = Group::new("bad", &mut l);
    assert!(matches!(
        group.error(),
        Some(Error::ShortNameTooLong { field, short }) if field == "flag" && short == "ab"
    ));
    assert!(group.is_empty());
}

#[derive(Default, Options)]
struct Logging {
    #[opt(short = 'q', long)]
    quiet: bool,
    #[opt(long)]
    log_level: Option<String>,
}

#[derive(Default, Options)]
struct Server {
    #[opt(short = 'p', long)]
    port: u16,
    #[opt(flatten)]
    logging: Logging,
    #[opt(long)]
    env: HashMap<String, String>,
}

#[test]
fn flatten_merges_options() {
    let mut server = Server::default();
    let mut group = Group::try_new("server", &mut server).unwrap();
    let names = group.iter().map(|o| o.to_string()).collect::<Vec<_>>();
    assert_eq!(names, ["-p, --port", "-q, --quiet", "--log-level", "--env"]);

    group.short_mut('q').unwrap().set(None).unwrap();
    group.long_mut("log-level").unwrap().set(Some("debug")).unwrap();
    group.long_mut("env").unwrap().set(Some("HOME=/root")).unwrap();
    drop(group);

    assert!(server.logging.quiet);
    assert_eq!(server.logging.log_level.as_deref(), Some("debug"));
    assert_eq!(server.env["HOME"], "/root");
}

#[derive(Default, Options)]
struct Clash {
    #[opt(short = 'q')]
    quick: bool,
    #[opt(flatten)]
    logging: Logging,
}

#[test]
fn flatten_reports_collisions() {
    let mut c = Clash::default();
    let group = Group::new("clash", &mut c);
    assert!(matches!(
        group.error(),
        Some(Error::DuplicateShort { short: 'q', .. })
    ));
    assert_eq!(group.len(), 1);
}

#[derive(Options)]
enum NotAStruct {
    #[allow(dead_code)]
    A,
}

#[derive(Options)]
struct Tuple(#[allow(dead_code)] u32);

#[test]
fn containers_must_be_named_structs() {
    let mut e = NotAStruct::A;
    let group = Group::new("enum", &mut e);
    match group.error() {
        Some(Error::NotStruct { container }) => assert_eq!(container, "NotAStruct"),
        e => panic!("unexpected result: {:?}", e),
    }
    assert!(group.is_empty());
    assert!(group.short('a').is_none());

    let mut t = Tuple(0);
    assert!(matches!(
        Group::try_new("tuple", &mut t),
        Err(Error::NotStruct { .. })
    ));
}

#[derive(Default, Options)]
struct Hooks {
    #[opt(short = 'V', long)]
    version: Callback,
    #[opt(long)]
    exec: Callback,
}

#[test]
fn callbacks() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let calls = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut hooks = Hooks {
        version: Callback::nullary({
            let calls = calls.clone();
            move || {
                calls.borrow_mut().push("version".to_owned());
                Ok::<_, BoxError>(())
            }
        }),
        exec: Callback::new({
            let calls = calls.clone();
            move |cmd: &str| {
                if cmd.is_empty() {
                    return Err("missing command");
                }
                calls.borrow_mut().push(cmd.to_owned());
                Ok(())
            }
        }),
    };

    let mut group = Group::try_new("hooks", &mut hooks).unwrap();
    let version = group.short_mut('V').unwrap();
    assert!(version.is_callback());
    assert!(!version.requires_argument());
    version.set(Some("ignored")).unwrap();

    let exec = group.long_mut("exec").unwrap();
    assert!(exec.requires_argument());
    exec.set(Some("ls")).unwrap();
    let err = exec.set(None).unwrap_err();
    assert!(matches!(err, Error::Callback(_)));
    assert_eq!(err.to_string(), "missing command");

    assert_eq!(*calls.borrow(), ["version", "ls"]);
}

#[derive(Default, Options)]
struct Generic<T: Default> {
    #[opt(long)]
    value: T,
}

#[test]
fn generic_container() {
    let mut g = Generic::<i64>::default();
    let mut group = Group::try_new("generic", &mut g).unwrap();
    group.long_mut("value").unwrap().set(Some("-12")).unwrap();
    drop(group);
    assert_eq!(g.value, -12);
}
