use afl::fuzz;
use nuban::{generate, validate, NubanError, ACCOUNT_NUMBER_LENGTH};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (serial, bytes) = split_bytes_once(bytes)?;
    let (bank_code, rand_seed) = split_bytes_once(bytes)?;

    let serial_str = std::str::from_utf8(serial).ok()?;
    let bank_code_str = std::str::from_utf8(bank_code).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(serial_str, bank_code_str, rng);

    Some(())
}

fn run_fuzz(serial: &str, bank_code: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Serial: {:?}", serial);
        println!("Bank code: {:?}", bank_code);
    }

    // arbitrary input used as an account number must never fail on its own
    match validate(serial, bank_code) {
        Ok(_) => {}
        Err(err) => assert_eq!(err, NubanError::InvalidBankCode),
    }

    let account_number = match generate(serial, bank_code) {
        Ok(account_number) => account_number,
        Err(_) => return,
    };
    #[cfg(feature = "manual_test")]
    println!("Account number: {:?}", account_number);

    assert_eq!(account_number.len(), ACCOUNT_NUMBER_LENGTH);
    assert_eq!(validate(&account_number, bank_code), Ok(true));

    // a single changed digit is always caught
    let mut tampered = account_number.into_bytes();
    let position = rng.gen_range(0..ACCOUNT_NUMBER_LENGTH);
    let shift = rng.gen_range(1..10u8);
    tampered[position] = b'0' + (tampered[position] - b'0' + shift) % 10;
    let tampered = String::from_utf8(tampered).unwrap();
    assert_eq!(validate(&tampered, bank_code), Ok(false));
}
