use anyhow::{bail, ensure, Context};
use clap::AppSettings;
use exp_elgamal::{
    common::{base16_decode_string, base16_encode_string},
    constants::DefaultCurve,
    elgamal::*,
};
use log::{error, info, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};
use structopt::StructOpt;

type Group = DefaultCurve;

/// Contents of a key file.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyFile {
    secret_key: SecretKey<Group>,
    public_key: PublicKey<Group>,
}

impl From<KeyPair<Group>> for KeyFile {
    fn from(kp: KeyPair<Group>) -> Self {
        KeyFile {
            secret_key: kp.secret,
            public_key: kp.public,
        }
    }
}

impl KeyFile {
    /// Check that the public key matches the secret key.
    fn into_key_pair(self) -> anyhow::Result<KeyPair<Group>> {
        let kp = KeyPair::from(self.secret_key);
        ensure!(
            kp.public == self.public_key,
            "The public key does not match the secret key."
        );
        Ok(kp)
    }
}

#[derive(StructOpt)]
struct Keygen {
    #[structopt(
        long = "out",
        help = "File to output the key pair to.",
        env = "ELGAMAL_KEY_FILE",
        default_value = "elgamal-keys.json"
    )]
    out:   PathBuf,
    #[structopt(long = "force", help = "Overwrite the output file if it exists.")]
    force: bool,
}

#[derive(StructOpt)]
struct Encrypt {
    #[structopt(
        long = "keys",
        help = "File with the key pair.",
        env = "ELGAMAL_KEY_FILE",
        default_value = "elgamal-keys.json"
    )]
    keys:   PathBuf,
    #[structopt(
        help = "Integers to encrypt. Only values in [-100, 100] can be decrypted.",
        allow_hyphen_values = true,
        required = true
    )]
    values: Vec<i64>,
}

#[derive(StructOpt)]
struct Decrypt {
    #[structopt(
        long = "keys",
        help = "File with the key pair.",
        env = "ELGAMAL_KEY_FILE",
        default_value = "elgamal-keys.json"
    )]
    keys:           PathBuf,
    #[structopt(
        long = "check-negative",
        help = "Also search negative values when decrypting."
    )]
    check_negative: bool,
    #[structopt(help = "Ciphers to decrypt, hex encoded.", required = true)]
    ciphers:        Vec<String>,
}

#[derive(StructOpt)]
struct Add {
    #[structopt(help = "Ciphers to add, hex encoded.", required = true)]
    ciphers: Vec<String>,
}

#[derive(StructOpt)]
struct IsZero {
    #[structopt(
        long = "keys",
        help = "File with the key pair.",
        env = "ELGAMAL_KEY_FILE",
        default_value = "elgamal-keys.json"
    )]
    keys:   PathBuf,
    #[structopt(help = "Cipher to check, hex encoded.")]
    cipher: String,
}

#[derive(StructOpt)]
#[structopt(
    about = "Tool for exponential Elgamal encryption of small integers.",
    name = "elgamal-tool",
    version = "0.1"
)]
enum ElgamalTool {
    #[structopt(name = "keygen", about = "Generate a fresh key pair.")]
    Keygen(Keygen),
    #[structopt(name = "encrypt", about = "Encrypt integers with the public key.")]
    Encrypt(Encrypt),
    #[structopt(name = "decrypt", about = "Decrypt ciphers of small integers.")]
    Decrypt(Decrypt),
    #[structopt(
        name = "add",
        about = "Add ciphers homomorphically. No key is needed."
    )]
    Add(Add),
    #[structopt(name = "is-zero", about = "Check whether a cipher encrypts zero.")]
    IsZero(IsZero),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = ElgamalTool::clap()
        .setting(AppSettings::ArgRequiredElseHelp)
        .global_setting(AppSettings::ColoredHelp);
    let matches = app.get_matches();
    let tool = ElgamalTool::from_clap(&matches);
    use ElgamalTool::*;
    let result = match tool {
        Keygen(kg) => handle_keygen(kg),
        Encrypt(enc) => handle_encrypt(enc),
        Decrypt(dec) => handle_decrypt(dec),
        Add(add) => handle_add(add),
        IsZero(iz) => handle_is_zero(iz),
    };
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

fn write_json_to_file<P: AsRef<Path>, T: Serialize>(filepath: P, v: &T) -> anyhow::Result<()> {
    let file = File::create(filepath)?;
    serde_json::to_writer_pretty(BufWriter::new(file), v)?;
    Ok(())
}

fn read_json_from_file<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> anyhow::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn read_key_pair(path: &Path) -> anyhow::Result<KeyPair<Group>> {
    let kf: KeyFile = read_json_from_file(path)
        .with_context(|| format!("Could not read keys from {}.", path.display()))?;
    kf.into_key_pair()
}

fn parse_ciphers(ciphers: &[String]) -> anyhow::Result<Vec<Cipher<Group>>> {
    ciphers
        .iter()
        .map(|s| {
            base16_decode_string(s.trim()).with_context(|| format!("Invalid cipher {}.", s))
        })
        .collect()
}

fn handle_keygen(kg: Keygen) -> anyhow::Result<()> {
    if kg.out.exists() {
        if !kg.force {
            bail!(
                "{} already exists. Use --force to overwrite it.",
                kg.out.display()
            );
        }
        warn!("Overwriting existing key file {}.", kg.out.display());
    }
    let mut csprng = rand::thread_rng();
    let kp = KeyPair::<Group>::generate(&mut csprng);
    write_json_to_file(&kg.out, &KeyFile::from(kp))
        .with_context(|| format!("Could not write keys to {}.", kg.out.display()))?;
    info!("Wrote a fresh key pair to {}.", kg.out.display());
    Ok(())
}

fn handle_encrypt(enc: Encrypt) -> anyhow::Result<()> {
    let kp = read_key_pair(&enc.keys)?;
    for n in enc.values.iter().filter(|n| n.unsigned_abs() > MAX_INT) {
        warn!("{} is outside [-{}, {}] and will not decrypt.", n, MAX_INT, MAX_INT);
    }
    info!("Encrypting {} values.", enc.values.len());
    let mut csprng = rand::thread_rng();
    for c in encrypt_int_vec(&kp.public, &enc.values, &mut csprng) {
        println!("{}", base16_encode_string(&c));
    }
    Ok(())
}

fn handle_decrypt(dec: Decrypt) -> anyhow::Result<()> {
    let kp = read_key_pair(&dec.keys)?;
    let ciphers = parse_ciphers(&dec.ciphers)?;
    info!("Decrypting {} ciphers.", ciphers.len());
    let values = decrypt_int_vec(&kp.secret, &ciphers, dec.check_negative)
        .context("Decryption failed. Was the cipher made with this key?")?;
    for n in values {
        println!("{}", n);
    }
    Ok(())
}

fn handle_add(add: Add) -> anyhow::Result<()> {
    let ciphers = parse_ciphers(&add.ciphers)?;
    info!("Adding {} ciphers.", ciphers.len());
    let sum: Cipher<Group> = ciphers.iter().sum();
    println!("{}", base16_encode_string(&sum));
    Ok(())
}

fn handle_is_zero(iz: IsZero) -> anyhow::Result<()> {
    let kp = read_key_pair(&iz.keys)?;
    let cipher: Cipher<Group> = base16_decode_string(iz.cipher.trim())
        .with_context(|| format!("Invalid cipher {}.", iz.cipher))?;
    info!("Checking whether the cipher encrypts zero.");
    println!("{}", kp.secret.decrypt_is_zero(&cipher));
    Ok(())
}
