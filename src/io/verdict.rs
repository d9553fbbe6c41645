pub fn valid() {
    println!("Valid");
}

pub fn fail() {
    println!("Fail");
}
