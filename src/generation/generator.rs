//! Pool sampling with a class-coverage repair pass.
//!
//! # Repair Model
//!
//! After the initial draw, classes are visited in canonical order.
//! A class that is already present gets its first occurrence marked as a
//! protected witness. A missing class is written into a uniformly chosen
//! unprotected position, which then becomes protected too.
//!
//! Each satisfied class always owns a protected position, so a later
//! repair can never erase the last occurrence of an earlier class. With
//! `length >= |classes|` there is always an unprotected position left.

use super::request::{GenerationError, GenerationRequest};
use crate::charset::ClassSet;
use crate::randomness::choose;
use rand_core::RngCore;

/// Generates a password for `request` using `rng`.
///
/// The output has exactly `request.length()` characters, drawn only from
/// the requested alphabets, with every requested class represented.
pub fn generate<R: RngCore + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<String, GenerationError> {
    request.validate()?;

    let classes = request.classes();
    let pool = classes.pool();

    let mut password = Vec::with_capacity(request.length());
    for _ in 0..request.length() {
        let byte = *choose(rng, &pool).map_err(GenerationError::RandomnessUnavailable)?;
        password.push(byte);
    }

    let repairs = repair(&mut password, classes, rng)?;
    debug_assert!(covers(&password, classes), "repair left a class unrepresented");

    tracing::debug!(
        length = request.length(),
        classes = %classes,
        repairs,
        "Generated password"
    );

    Ok(password.into_iter().map(char::from).collect())
}

/// Ensures every class in `classes` occurs in `password`.
///
/// Returns the number of positions overwritten.
fn repair<R: RngCore + ?Sized>(
    password: &mut [u8],
    classes: ClassSet,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    let mut protected = vec![false; password.len()];
    let mut repairs = 0;

    for class in classes.iter() {
        if let Some(witness) = password.iter().position(|&b| class.contains(b as char)) {
            protected[witness] = true;
            continue;
        }

        let candidates: Vec<usize> = (0..password.len()).filter(|&i| !protected[i]).collect();
        let position = *choose(rng, &candidates).map_err(GenerationError::RandomnessUnavailable)?;
        let replacement =
            *choose(rng, class.alphabet()).map_err(GenerationError::RandomnessUnavailable)?;

        password[position] = replacement;
        protected[position] = true;
        repairs += 1;

        tracing::trace!(%class, position, "Repaired missing class");
    }

    Ok(repairs)
}

fn covers(password: &[u8], classes: ClassSet) -> bool {
    classes
        .iter()
        .all(|class| password.iter().any(|&b| class.contains(b as char)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharacterClass;
    use crate::generation::RequestError;
    use crate::randomness::{RandomSource, SourcePolicy};
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use std::num::NonZeroU32;

    /// Always yields zero: every draw picks the first candidate.
    struct Zeros;

    impl RngCore for Zeros {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    /// Succeeds for `remaining` fills, then fails.
    struct FailsAfter {
        remaining: usize,
    }

    impl RngCore for FailsAfter {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            if self.remaining == 0 {
                return Err(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap().into());
            }
            self.remaining -= 1;
            dest.fill(0);
            Ok(())
        }
    }

    fn classes(list: &[CharacterClass]) -> ClassSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_repeated_repairs_do_not_collide() {
        // The draw yields "AAA". Digit and symbol both need repair; a
        // single-pass repair choosing position 0 twice would lose both
        // the uppercase and the digit.
        let request = GenerationRequest::new(
            3,
            classes(&[
                CharacterClass::Uppercase,
                CharacterClass::Digit,
                CharacterClass::Symbol,
            ]),
        );

        let password = generate(&request, &mut Zeros).unwrap();
        assert_eq!(password, "A0!");
    }

    #[test]
    fn test_all_classes_from_degenerate_draw() {
        let request = GenerationRequest::new(4, ClassSet::all());
        let password = generate(&request, &mut Zeros).unwrap();
        assert_eq!(password, "aA0!");
    }

    #[test]
    fn test_no_repair_when_draw_covers_classes() {
        let request = GenerationRequest::new(8, classes(&[CharacterClass::Lowercase]));
        assert_eq!(generate(&request, &mut Zeros).unwrap(), "aaaaaaaa");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let request = GenerationRequest::new(20, ClassSet::all());

        let first = generate(&request, &mut ChaCha20Rng::seed_from_u64(1234)).unwrap();
        let second = generate(&request, &mut ChaCha20Rng::seed_from_u64(1234)).unwrap();
        let other = generate(&request, &mut ChaCha20Rng::seed_from_u64(4321)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_output_respects_request() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let set = classes(&[CharacterClass::Digit, CharacterClass::Symbol]);
        let request = GenerationRequest::new(12, set);

        for _ in 0..500 {
            let password = generate(&request, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().all(|c| set.admits(c)));
            assert!(covers(password.as_bytes(), set));
        }
    }

    #[test]
    fn test_minimum_length_covers_every_class() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let request = GenerationRequest::new(4, ClassSet::all());

        for _ in 0..2_000 {
            let password = generate(&request, &mut rng).unwrap();
            for class in CharacterClass::ALL {
                assert!(class.is_present_in(&password), "{} missing in {}", class, password);
            }
        }
    }

    #[test]
    fn test_empty_class_set_is_invalid() {
        let request = GenerationRequest::new(16, ClassSet::empty());
        let err = generate(&request, &mut Zeros).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidRequest(RequestError::NoClasses)
        ));
    }

    #[test]
    fn test_too_short_is_invalid() {
        let request = GenerationRequest::new(1, ClassSet::all());
        let err = generate(&request, &mut Zeros).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_source_failure_during_draw() {
        let request = GenerationRequest::new(8, ClassSet::all());
        let err = generate(&request, &mut FailsAfter { remaining: 3 }).unwrap_err();
        assert!(matches!(err, GenerationError::RandomnessUnavailable(_)));
    }

    #[test]
    fn test_source_failure_during_repair() {
        // Eight zero draws give "aaaaaaaa"; the first repair then fails.
        let request = GenerationRequest::new(8, ClassSet::all());
        let err = generate(&request, &mut FailsAfter { remaining: 8 }).unwrap_err();
        assert!(matches!(err, GenerationError::RandomnessUnavailable(_)));
    }

    #[test]
    fn test_secure_only_source_fails_closed() {
        let mut source =
            RandomSource::from_primary(FailsAfter { remaining: 0 }, SourcePolicy::SecureOnly);
        let request = GenerationRequest::new(12, ClassSet::all());

        let err = generate(&request, &mut source).unwrap_err();
        assert!(matches!(err, GenerationError::RandomnessUnavailable(_)));
        assert!(!source.is_degraded());
    }

    #[test]
    fn test_degraded_source_still_yields_valid_password() {
        let mut source =
            RandomSource::from_primary(FailsAfter { remaining: 0 }, SourcePolicy::AllowDegraded);
        let set = ClassSet::all();
        let request = GenerationRequest::new(12, set);

        let password = generate(&request, &mut source).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| set.admits(c)));
        for class in CharacterClass::ALL {
            assert!(class.is_present_in(&password), "{} missing in {}", class, password);
        }
        assert!(source.is_degraded());
    }
}
