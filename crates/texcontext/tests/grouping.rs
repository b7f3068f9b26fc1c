use std::borrow::Cow;
use texcontext::*;

#[test]
fn local_assignment_is_undone() {
    let mut context = Context::new();
    context.open_group(GroupType::Simple);
    context.set(Category::Count, "x", Value::Integer(5), Scope::Local);
    context.close_group().unwrap();
    assert_eq!(context.get(Category::Count, "x"), None);
}

#[test]
fn local_assignment_restores_previous_value() {
    let mut context = Context::new();
    context.set_count("x", 1, Scope::Local);
    context.open_group(GroupType::Simple);
    context.set_count("x", 2, Scope::Local);
    context.set_count("x", 3, Scope::Local);
    context.open_group(GroupType::Simple);
    context.set_count("x", 4, Scope::Local);
    context.close_group().unwrap();
    assert_eq!(context.count("x"), Ok(3));
    context.close_group().unwrap();
    assert_eq!(context.count("x"), Ok(1));
}

#[test]
fn global_assignment_survives_nested_groups() {
    let mut context = Context::new();
    context.open_group(GroupType::Simple);
    context.set(
        Category::Count,
        "x",
        Value::Integer(5),
        Scope::from_global_flag(false),
    );
    context.open_group(GroupType::Simple);
    context.set(
        Category::Count,
        "x",
        Value::Integer(9),
        Scope::from_global_flag(true),
    );
    context.close_group().unwrap();
    context.close_group().unwrap();
    assert_eq!(context.get(Category::Count, "x"), Some(&Value::Integer(9)));
}

#[test]
fn global_assignment_is_visible_immediately() {
    let mut context = Context::new();
    context.open_group(GroupType::Simple);
    context.set_count("x", 5, Scope::Local);
    context.open_group(GroupType::Simple);
    context.set_count("x", 9, Scope::Global);
    assert_eq!(context.count("x"), Ok(9));
    context.close_group().unwrap();
    assert_eq!(context.count("x"), Ok(9));
}

#[test]
fn closing_bottom_level_fails_without_changes() {
    let mut context = Context::new();
    context.set_count("x", 7, Scope::Local);
    context.set_catcode('@', CatCode::Letter, Scope::Global);
    assert_eq!(context.close_group(), Err(Error::UnbalancedGroup));
    assert_eq!(context.count("x"), Ok(7));
    assert_eq!(context.catcode('@'), Ok(CatCode::Letter));
    assert_eq!(context.level(), 0);
}

#[test]
fn unbalanced_group_message() {
    assert_eq!(
        Error::UnbalancedGroup.to_string(),
        "there is no group to end"
    );
}

#[test]
fn after_group_actions_fire_after_restoration_in_order() {
    let mut context = Context::new();
    context.set_count("x", 10, Scope::Local);
    context.open_group(GroupType::Simple);
    context.set_count("x", 20, Scope::Local);
    context.after_group(Token::ControlSequence("first".into()));
    context.after_group_callback(|context| {
        let x = context.count("x").unwrap();
        context.set_count("log", x, Scope::Global);
    });
    context.after_group(Token::ControlSequence("second".into()));
    context.after_group_callback(|context| {
        let log = context.count("log").unwrap();
        context.set_count("log", log * 2, Scope::Global);
    });
    let tokens = context.close_group().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::ControlSequence("first".into()),
            Token::ControlSequence("second".into())
        ]
    );
    assert_eq!(context.count("log"), Ok(20));
}

#[test]
fn custom_category() {
    let mut context = Context::new();
    let category = Category::Custom("colorstack".into());
    context.open_group(GroupType::Simple);
    context.set(
        category.clone(),
        0_usize,
        Value::Str("red".into()),
        Scope::Local,
    );
    assert_eq!(
        context.get(category.clone(), 0_usize),
        Some(&Value::Str("red".into()))
    );
    context.close_group().unwrap();
    assert_eq!(context.get(category, 0_usize), None);
}

#[test]
fn lookup_uses_fallbacks() {
    let context = Context::new();
    assert_eq!(
        context.lookup(Category::MathCode, '7').map(Cow::into_owned),
        Some(Value::Integer(0x7037))
    );
    assert_eq!(context.lookup(Category::Code, "par"), None);
    assert_eq!(context.interaction(), Ok(Interaction::ErrorStop));
}

#[test]
fn typesetting_context_is_scoped() {
    let mut context = Context::new();
    let red = TypesettingContext {
        color: Color {
            red: 255,
            green: 0,
            blue: 0,
            alpha: 255,
        },
        ..Default::default()
    };
    context.open_group(GroupType::Simple);
    context.set_typesetting_context(red.clone(), Scope::Local);
    assert_eq!(context.typesetting_context(), Ok(red));
    context.close_group().unwrap();
    assert_eq!(context.typesetting_context(), Ok(Default::default()));
}

#[cfg(feature = "serde")]
#[test]
fn values_serialize() {
    let value = Value::Tokens(vec![Token::Char('a', CatCode::Letter)]);
    let json = serde_json::to_string(&value).unwrap();
    let got: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(got, value);
}
