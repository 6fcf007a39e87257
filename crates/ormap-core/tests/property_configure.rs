use ormap_core::schema::*;
use pretty_assertions::assert_eq;

struct Model {
    catalog: Catalog,
    user: ClassId,
    profile: ClassId,
    post: ClassId,
    group: ClassId,
}

fn model() -> Model {
    let mut catalog = Catalog::new();
    let user = catalog.add_class("User").unwrap();
    let profile = catalog.add_class("Profile").unwrap();
    let post = catalog.add_class("Post").unwrap();
    let group = catalog.add_class("Group").unwrap();

    catalog.add_property(user, "id", Primitive::I64).unwrap();
    catalog.add_property(user, "name", Primitive::String).unwrap();
    catalog.add_property(user, "age", Primitive::I32).unwrap();
    catalog
        .add_property(user, "profile", ValueType::Class(profile))
        .unwrap();
    catalog
        .add_property(user, "posts", ValueType::List(post))
        .unwrap();
    catalog
        .add_property(user, "groups", ValueType::List(group))
        .unwrap();
    catalog
        .add_property(post, "author", ValueType::Class(user))
        .unwrap();

    Model {
        catalog,
        user,
        profile,
        post,
        group,
    }
}

#[test]
fn chains_keep_the_concrete_kind() {
    let m = model();
    let catalog = &m.catalog;

    // Each chain ends in a kind-specific method, which only compiles if the
    // shared configuration methods returned the concrete type.
    let groups = ManyToMany::new(catalog, catalog.select(m.user, "groups").unwrap())
        .unwrap()
        .enable_cascade()
        .enable_indexing()
        .set_table_name("Membership")
        .unwrap();
    assert_eq!(groups.join_table(), "Membership");
    assert_eq!(groups.classes(), (m.user, m.group));

    let posts = OneToMany::new(catalog, catalog.select(m.user, "posts").unwrap())
        .unwrap()
        .enable_cascade()
        .reciprocal("author");
    assert_eq!(posts.reciprocal.as_deref(), Some("author"));
    assert_eq!(posts.target, m.post);

    let profile = OneToOne::new(catalog, catalog.select(m.user, "profile").unwrap())
        .unwrap()
        .disallow_nulls()
        .owns_foreign_key();
    assert!(profile.owning);
    assert_eq!(profile.target, m.profile);
}

#[test]
fn every_flag_is_set_by_its_method() {
    let m = model();
    let catalog = &m.catalog;

    let id = Scalar::new(catalog, catalog.select(m.user, "id").unwrap())
        .unwrap()
        .disallow_nulls()
        .mark_unique()
        .enable_indexing()
        .enable_auto_increment()
        .enable_cascade()
        .set_field_name("user_id")
        .unwrap()
        .set_table_name("Users")
        .unwrap()
        .set_default_value(|| 0_i64);

    let def = id.def();
    assert_eq!(def.field_name, "user_id");
    assert_eq!(def.table_name, "Users");
    assert!(!def.nullable);
    assert!(def.unique);
    assert!(def.indexed);
    assert!(def.auto_increment);
    assert!(def.cascade);
    assert_eq!(def.default_value(), Value::I64(0));
    assert_eq!(def.selector.property(), "id");
    assert_eq!(def.selector.class(), m.user);
}

#[test]
fn empty_names_are_rejected() {
    let m = model();
    let catalog = &m.catalog;
    let name = || Scalar::new(catalog, catalog.select(m.user, "name").unwrap()).unwrap();

    let err = name().set_field_name("").unwrap_err();
    assert!(err.is_configuration());

    let err = name().set_table_name("").unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration: table name for `name` must not be empty"
    );
}

#[test]
fn max_length_must_be_positive() {
    let m = model();
    let catalog = &m.catalog;

    let name = Scalar::new(catalog, catalog.select(m.user, "name").unwrap())
        .unwrap()
        .set_field_name("x")
        .unwrap();
    assert_eq!(name.def().field_name, "x");

    let err = name.set_max_length(0).unwrap_err();
    assert!(err.is_configuration());

    let name = Scalar::new(catalog, catalog.select(m.user, "name").unwrap())
        .unwrap()
        .set_max_length(64)
        .unwrap();
    assert_eq!(name.def().max_length, Some(64));
}

#[test]
fn collection_defaults_are_independent() {
    let m = model();
    let catalog = &m.catalog;

    let groups = ManyToMany::new(catalog, catalog.select(m.user, "groups").unwrap()).unwrap();
    let posts = OneToMany::new(catalog, catalog.select(m.user, "posts").unwrap()).unwrap();

    for def in [groups.def(), posts.def()] {
        let mut first = def.default_value();
        let second = def.default_value();

        assert_eq!(first, Value::List(vec![]));
        if let Value::List(items) = &mut first {
            items.push(Value::from("leaked"));
        }
        assert_eq!(second, Value::List(vec![]));
        assert_eq!(def.default_value(), Value::List(vec![]));
    }
}

#[test]
fn single_references_default_to_null() {
    let m = model();
    let catalog = &m.catalog;

    let author = ManyToOne::new(catalog, catalog.select(m.post, "author").unwrap()).unwrap();
    assert_eq!(author.def().default_value(), Value::Null);
    assert_eq!(author.def().table_name, "Post");
    assert_eq!(author.target, m.user);
}

#[test]
fn set_default_value_replaces_provider() {
    let m = model();
    let catalog = &m.catalog;

    let groups = ManyToMany::new(catalog, catalog.select(m.user, "groups").unwrap())
        .unwrap()
        .set_default_value(|| vec![Value::I64(1)]);

    assert_eq!(
        groups.def().default_value(),
        Value::List(vec![Value::I64(1)])
    );
}

#[test]
fn kinds_reject_mismatched_property_shapes() {
    let m = model();
    let catalog = &m.catalog;

    let name = || catalog.select(m.user, "name").unwrap();
    let posts = || catalog.select(m.user, "posts").unwrap();
    let profile = || catalog.select(m.user, "profile").unwrap();

    assert!(Scalar::new(catalog, posts()).unwrap_err().is_configuration());
    assert!(ManyToOne::new(catalog, name()).unwrap_err().is_configuration());
    assert!(ManyToOne::new(catalog, posts()).unwrap_err().is_configuration());
    assert!(OneToOne::new(catalog, posts()).unwrap_err().is_configuration());
    assert!(OneToMany::new(catalog, profile()).unwrap_err().is_configuration());
    assert!(ManyToMany::new(catalog, name()).unwrap_err().is_configuration());
}

#[test]
fn mapping_exposes_kind_and_target() {
    let m = model();
    let catalog = &m.catalog;

    let age: Mapping = Scalar::new(catalog, catalog.select(m.user, "age").unwrap())
        .unwrap()
        .into();
    assert_eq!(age.kind(), MappingKind::Scalar);
    assert!(!age.is_relation());
    assert_eq!(age.target(), None);

    let author: Mapping = ManyToOne::new(catalog, catalog.select(m.post, "author").unwrap())
        .unwrap()
        .into();
    assert_eq!(author.kind(), MappingKind::ManyToOne);
    assert!(author.holds_foreign_key());
    assert_eq!(author.target(), Some(m.user));
    assert_eq!(author.class(), m.post);
}
