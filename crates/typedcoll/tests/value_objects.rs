use typedcoll::{Collection, Elements, Error, Item, ItemType, Result, ValueObject, impl_collection};

#[derive(Debug, Clone, PartialEq)]
struct Money {
    amount: u64,
    currency: &'static str,
}

impl Money {
    fn usd(amount: u64) -> Box<dyn ValueObject> {
        Box::new(Self {
            amount,
            currency: "USD",
        })
    }
}

impl Item for Money {
    fn equals_to(&self, other: &Self) -> bool {
        self == other
    }

    fn item_type(&self) -> ItemType {
        ItemType::of::<Self>()
    }
}

/// A discount is a kind of money.
#[derive(Debug, Clone, PartialEq)]
struct Discount(u64);

impl Item for Discount {
    fn equals_to(&self, other: &Self) -> bool {
        self == other
    }

    fn item_type(&self) -> ItemType {
        ItemType::of::<Self>()
    }

    fn accepts_type(declared: ItemType) -> bool {
        declared.is::<Self>() || Money::accepts_type(declared)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

impl Item for Label {
    fn equals_to(&self, other: &Self) -> bool {
        self == other
    }

    fn item_type(&self) -> ItemType {
        ItemType::of::<Self>()
    }
}

fn label(text: &str) -> Box<dyn ValueObject> {
    Box::new(Label(text.to_owned()))
}

#[derive(Debug, Clone)]
struct Payments(Elements<usize, Box<dyn ValueObject>>);

impl_collection!(Payments, usize, Box<dyn ValueObject>, ItemType::of::<Money>());

#[test]
fn test_from_array_rejects_foreign_item() {
    let error = Payments::from_array([Money::usd(5), label("not-money")]).unwrap_err();

    assert_eq!(
        error,
        Error::UnsupportedItemType {
            actual: ItemType::of::<Label>().name(),
            declared: ItemType::of::<Money>().name(),
        }
    );
}

#[test]
fn test_fresh_collection_after_failed_build() -> Result<()> {
    assert!(Payments::from_array([Money::usd(5), label("not-money")]).is_err());

    let payments = Payments::from_array([Money::usd(5)])?;
    assert_eq!(payments.count(), 1);

    Ok(())
}

#[test]
fn test_add_item_rejects_foreign_item() -> Result<()> {
    let mut payments = Payments::new();
    payments.add_item(Money::usd(1))?;

    let result = payments.add_item(label("one"));

    assert!(matches!(result, Err(Error::UnsupportedItemType { .. })));
    assert_eq!(payments.count(), 1);
    assert!(!payments.has(&label("one")));

    Ok(())
}

#[test]
fn test_subtypes_are_accepted() -> Result<()> {
    let payments = Payments::from_array([Money::usd(10), Box::new(Discount(2)) as Box<dyn ValueObject>])?;

    assert_eq!(payments.count(), 2);
    assert!(payments.has(&(Box::new(Discount(2)) as Box<dyn ValueObject>)));
    assert_eq!(
        payments.get(1).map(|item| item.item_type()),
        Some(ItemType::of::<Discount>())
    );

    Ok(())
}

#[test]
fn test_has_compares_concrete_values() -> Result<()> {
    let payments = Payments::from_array([Money::usd(10), Money::usd(20)])?;

    assert!(payments.has(&Money::usd(10)));
    assert!(!payments.has(&Money::usd(99)));
    // Same amount, different type.
    assert!(!payments.has(&(Box::new(Discount(10)) as Box<dyn ValueObject>)));

    Ok(())
}

#[test]
fn test_filter_keeps_concrete_collection() -> Result<()> {
    let payments = Payments::from_array([
        Money::usd(10),
        Box::new(Discount(3)) as Box<dyn ValueObject>,
        Money::usd(20),
    ])?;

    let large: Payments = payments.filter(|item| {
        item.downcast_ref::<Money>()
            .is_some_and(|money| money.amount > 15)
    });

    assert_eq!(payments.count(), 3);
    assert_eq!(large.count(), 1);
    assert!(large.first().is_some_and(|item| item.equals_to(&Money::usd(20))));

    Ok(())
}
