use optbind::{Group, Options};

#[derive(Options)]
struct Borrowed<'s> {
    #[opt(short = 'n')]
    name: &'s mut String,
    #[opt(long)]
    count: usize,
}

#[derive(Options)]
struct Empty {}

#[derive(Options)]
struct Unit;

fn main() {
    let mut name = String::new();
    let mut b = Borrowed {
        name: &mut name,
        count: 0,
    };
    let mut group = Group::try_new("borrowed", &mut b).unwrap();
    group.short_mut('n').unwrap().set(Some("x")).unwrap();
    drop(group);
    assert_eq!(b.count, 0);
    assert_eq!(name, "x");

    let mut e = Empty {};
    assert!(Group::try_new("empty", &mut e).unwrap().is_empty());
    assert!(Group::new("unit", &mut Unit).error().is_some());
}
