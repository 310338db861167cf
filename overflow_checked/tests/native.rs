use overflow_checked::{native, ops, Checked, Policy};

macro_rules! agrees {
    ($($name:ident: $T:ty),*) => {
        $(
            fn $name(a: $T, b: $T, policy: &Policy) {
                let (x, y) = (Checked::<$T>::from(a), Checked::<$T>::from(b));
                assert_eq!(native::add(x, y, policy), ops::add(x, y, policy), "{a}+{b}");
                assert_eq!(
                    native::subtract(x, y, policy),
                    ops::subtract(x, y, policy),
                    "{a}-{b}"
                );
                assert_eq!(
                    native::multiply(x, y, policy),
                    ops::multiply(x, y, policy),
                    "{a}*{b}"
                );
            }
        )*
    };
}

agrees!(agrees_i8: i8, agrees_u8: u8, agrees_i32: i32, agrees_i64: i64, agrees_u64: u64);

#[test]
fn test_flags_match_detectors_i8() {
    let policy = Policy::new();
    for a in i8::MIN..=i8::MAX {
        for b in i8::MIN..=i8::MAX {
            agrees_i8(a, b, &policy);
        }
    }
}

#[test]
fn test_flags_match_detectors_u8() {
    let policy = Policy::new();
    for a in u8::MIN..=u8::MAX {
        for b in u8::MIN..=u8::MAX {
            agrees_u8(a, b, &policy);
        }
    }
}

#[test]
fn test_flags_match_detectors_wide() {
    let policy = Policy::new();
    let values = [i64::MIN, i64::MIN + 1, -3, -1, 0, 1, 3, i64::MAX - 1, i64::MAX];
    for a in values {
        for b in values {
            agrees_i64(a, b, &policy);
            agrees_u64(a as u64, b as u64, &policy);
            agrees_i32(a as i32, b as i32, &policy);
        }
    }
}

#[test]
fn test_flags_respect_policy() {
    let policy = Policy::unchecked();
    let a = Checked::<u32>::MAX;
    let b = Checked::<u32>::from(2);
    assert_eq!(native::add(a, b, &policy).unwrap().get(), 1);
    assert_eq!(native::multiply(a, b, &policy).unwrap().get(), u32::MAX - 1);
}
