use optbind::{Group, Options};

#[derive(Default, Options)]
struct Cli {
    /// Kind of the build
    #[opt(long)]
    r#type: String,
    #[opt(short = 'f', long)]
    r#final: bool,
}

fn main() {
    let mut cli = Cli::default();
    let mut group = Group::try_new("raw", &mut cli).unwrap();
    group.long_mut("type").unwrap().set(Some("release")).unwrap();
    group.long_mut("final").unwrap().set(None).unwrap();
    drop(group);
    assert_eq!(cli.r#type, "release");
    assert!(cli.r#final);
}
