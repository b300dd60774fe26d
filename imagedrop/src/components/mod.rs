pub mod imagedrop;
