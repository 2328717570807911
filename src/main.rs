//! Demo harness: walks the public create/set/get/algebra surface in
//! sequence and prints each result.

use matriz::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    println!("------------ Vector setters and getters. ------------");
    let mut v = Vector::new(20)?;
    for i in 0..v.capacity() {
        let scaled = 2.0 * (i as f64 / v.capacity() as f64) - 1.0;
        v.set(i, scaled)?;
    }
    println!("{v}");
    println!("The value at position 2 is: [{}]", v.get(2)?);
    println!("The value at position 10 is: [{}]", v.get(10)?);

    println!("------------ Vectors addition. ------------");
    let a = Vector::from_slice(&[4.0, 3.0])?;
    let b = Vector::from_slice(&[1.0, 2.0])?;
    println!("{a} + {b} = {}", a.add(&b)?);

    println!("------------ Vectors subtraction. ------------");
    println!("{a} - {b} = {}", a.sub(&b)?);

    println!("------------ Vector multiplication: dot product. ------------");
    println!("{a} . {b} = [{}]", a.dot(&b)?);

    println!("------------ Vector multiplication by a scalar[4.5]. ------------");
    println!("4.5 * {a} = {}", a.mul_scalar(4.5)?);

    println!("------------ Vector concatenation. ------------");
    println!("{a} ++ {b} = {}", a.concatenate(&b)?);

    println!("------------ Random vector. ------------");
    let mut rng = StdRng::seed_from_u64(1);
    let r = Vector::random(5, -1.0, 1.0, &mut rng)?;
    println!("{r}");

    println!("------------ Matrix scalar multiplication. ------------");
    let m = Matrix::from_array(&[1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0], 3, 3)?;
    println!("{m}");
    println!("4.5 * m =");
    println!("{}", m.mul_scalar(4.5)?);

    println!("------------ Matrix multiplication. ------------");
    let p = Matrix::from_array(&[1.0, 1.0, 2.0, 2.0], 2, 2)?;
    let q = Matrix::from_array(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], 2, 3)?;
    println!("{}", p.matmul(&q)?);

    println!("------------ Matrix times vector. ------------");
    let w = Matrix::from_array(
        &[
            1.0, 1.0, 1.0, 1.0, 1.0, 1.0, //
            2.0, 2.0, 2.0, 2.0, 2.0, 2.0, //
            3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
        ],
        3,
        6,
    )?;
    let x = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    println!("{}", w.matvec(&x)?);

    println!("------------ Matrix transpose. ------------");
    println!("{}", q.transpose());

    println!("------------ Casting. ------------");
    println!("as column matrix:");
    println!("{}", a.to_matrix()?);
    println!("back to vector: {}", a.to_matrix()?.to_vector()?);

    println!("------------ Vector serialization. ------------");
    let mut s = Vector::new(2)?;
    s.set(0, 0.0000000000045)?;
    s.set(1, 320.2519111111193)?;
    let text = s.serialize()?;
    println!("Serialized Vector String: {text}");
    println!("Unserialized Vector: {}", Vector::unserialize(&text)?);

    Ok(())
}
