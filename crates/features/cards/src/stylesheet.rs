/// Font Awesome 6 stylesheet the icon classes refer to.
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Static part of the card styling. Flag-dependent values are inlined per card.
///
/// Must stay free of quotes, `&` and angle brackets: server rendering escapes text content.
pub const STYLESHEET: &str = r"
.tech-grid {
  display: flex;
  flex-wrap: wrap;
  width: 100%;
  margin-left: auto;
  margin-right: auto;
}
.portfolio-tech {
  text-transform: uppercase;
}
.tech-card {
  display: flex;
  flex-direction: column;
  width: 100%;
  height: 8rem;
  background-size: cover;
  cursor: pointer;
  text-decoration: none;
}
.tech-card--link:hover {
  text-decoration: none;
}
.tech-card__header {
  position: relative;
  width: 100%;
  padding: 0 4px;
  box-sizing: border-box;
  font-family: Bebas Neue, sans-serif;
  font-size: 24px;
  font-weight: bold;
  text-align: left;
  text-transform: uppercase;
  text-decoration: none;
}
.tech-card__title {
  float: left;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}
.tech-card__folder {
  position: relative;
  float: right;
  top: 5px;
  right: 5px;
}
.tech-card__marker {
  position: absolute;
  top: 13px;
  right: 16px;
  font-size: 10px;
}
.tech-card__body {
  width: 100%;
  height: 100%;
}
.tech-card__indicator {
  display: inline-block;
  width: auto;
  height: 34px;
  background: rgba(255, 255, 255, 0.9);
  border-bottom-right-radius: 8px;
}
.tech-card__square {
  margin: 10px 4px 6px 8px;
  font-size: 16px;
}
.tech-card__icon {
  margin: 4px;
  font-size: 24px;
  color: grey;
}
";
